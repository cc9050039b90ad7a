use crate::model::Application;
use accessmap_core::{
    codec::record::{Field, Record},
    config::ConfigModel,
    error::MapResult,
    tree::{Scope, TreeMap},
};

impl Record for Application {
    const NAME: &'static str = "Application";
    const REQUIRED: &'static [&'static str] =
        &["name", "context_root", "default_auth_type", "virtual_host_ids"];

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar("name", |r| &r.name, |r| &mut r.name),
            Field::scalar("description", |r| &r.description, |r| &mut r.description),
            Field::scalar("context_root", |r| &r.context_root, |r| &mut r.context_root),
            Field::scalar(
                "default_auth_type",
                |r| &r.default_auth_type,
                |r| &mut r.default_auth_type,
            ),
            Field::scalar("destination", |r| &r.destination, |r| &mut r.destination),
            Field::scalar(
                "application_type",
                |r| &r.application_type,
                |r| &mut r.application_type,
            ),
            Field::scalar("realm", |r| &r.realm, |r| &mut r.realm),
            Field::scalar("agent_id", |r| &r.agent_id, |r| &mut r.agent_id),
            Field::scalar("site_id", |r| &r.site_id, |r| &mut r.site_id),
            Field::scalar("web_session_id", |r| &r.web_session_id, |r| &mut r.web_session_id),
            Field::list(
                "virtual_host_ids",
                |r| &r.virtual_host_ids,
                |r| &mut r.virtual_host_ids,
            ),
            Field::scalar("enabled", |r| &r.enabled, |r| &mut r.enabled),
            Field::scalar(
                "case_sensitive_path",
                |r| &r.case_sensitive_path,
                |r| &mut r.case_sensitive_path,
            ),
            Field::scalar("require_https", |r| &r.require_https, |r| &mut r.require_https),
            Field::scalar(
                "spa_support_enabled",
                |r| &r.spa_support_enabled,
                |r| &mut r.spa_support_enabled,
            ),
            Field::groups("policy", |r| &r.policy, |r| &mut r.policy),
        ]
    }
}

///
/// ApplicationMapper
///

pub struct ApplicationMapper;

impl ApplicationMapper {
    pub fn expand(map: &TreeMap) -> MapResult<Application> {
        super::expand(map, &Scope::root())
    }

    pub fn expand_with(map: &TreeMap, config: &ConfigModel) -> MapResult<Application> {
        super::expand_with(map, config)
    }

    #[must_use]
    pub fn flatten(model: &Application) -> TreeMap {
        super::flatten(model)
    }

    #[must_use]
    pub fn read(model: &Application, prior: &TreeMap) -> TreeMap {
        super::read(model, prior)
    }
}
