use crate::model::WebSession;
use accessmap_core::{
    codec::record::{Field, Record},
    config::ConfigModel,
    error::MapResult,
    tree::{Scope, TreeMap},
};

impl Record for WebSession {
    const NAME: &'static str = "WebSession";
    const REQUIRED: &'static [&'static str] = &["name", "audience", "client_credentials"];

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar("name", |r| &r.name, |r| &mut r.name),
            Field::scalar("audience", |r| &r.audience, |r| &mut r.audience),
            Field::record(
                "client_credentials",
                |r| &r.client_credentials,
                |r| &mut r.client_credentials,
            ),
            Field::scalar("cookie_domain", |r| &r.cookie_domain, |r| &mut r.cookie_domain),
            Field::scalar("cookie_type", |r| &r.cookie_type, |r| &mut r.cookie_type),
            Field::scalar(
                "http_only_cookie",
                |r| &r.http_only_cookie,
                |r| &mut r.http_only_cookie,
            ),
            Field::scalar("secure_cookie", |r| &r.secure_cookie, |r| &mut r.secure_cookie),
            Field::scalar(
                "idle_timeout_in_minutes",
                |r| &r.idle_timeout_in_minutes,
                |r| &mut r.idle_timeout_in_minutes,
            ),
            Field::scalar(
                "session_timeout_in_minutes",
                |r| &r.session_timeout_in_minutes,
                |r| &mut r.session_timeout_in_minutes,
            ),
            Field::list("scopes", |r| &r.scopes, |r| &mut r.scopes),
            Field::scalar(
                "oidc_login_type",
                |r| &r.oidc_login_type,
                |r| &mut r.oidc_login_type,
            ),
            Field::scalar(
                "pkce_challenge_type",
                |r| &r.pkce_challenge_type,
                |r| &mut r.pkce_challenge_type,
            ),
            Field::scalar(
                "request_preservation_type",
                |r| &r.request_preservation_type,
                |r| &mut r.request_preservation_type,
            ),
            Field::scalar(
                "web_storage_type",
                |r| &r.web_storage_type,
                |r| &mut r.web_storage_type,
            ),
            Field::scalar(
                "send_requested_url_to_provider",
                |r| &r.send_requested_url_to_provider,
                |r| &mut r.send_requested_url_to_provider,
            ),
            Field::scalar(
                "cache_user_attributes",
                |r| &r.cache_user_attributes,
                |r| &mut r.cache_user_attributes,
            ),
        ]
    }
}

///
/// WebSessionMapper
///

pub struct WebSessionMapper;

impl WebSessionMapper {
    pub fn expand(map: &TreeMap) -> MapResult<WebSession> {
        super::expand(map, &Scope::root())
    }

    pub fn expand_with(map: &TreeMap, config: &ConfigModel) -> MapResult<WebSession> {
        super::expand_with(map, config)
    }

    #[must_use]
    pub fn flatten(model: &WebSession) -> TreeMap {
        super::flatten(model)
    }

    /// Flatten a server response, keeping the configured client secret.
    #[must_use]
    pub fn read(model: &WebSession, prior: &TreeMap) -> TreeMap {
        super::read(model, prior)
    }
}
