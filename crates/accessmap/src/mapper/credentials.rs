use crate::model::OAuthClientCredentials;
use accessmap_core::{
    codec::record::{Field, Record, RecordMapper},
    config::ConfigModel,
    error::MapResult,
    tree::{Scope, TreeMap},
};
use serde_json::Value;

impl Record for OAuthClientCredentials {
    const NAME: &'static str = "OAuthClientCredentials";

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar("client_id", |r| &r.client_id, |r| &mut r.client_id),
            Field::hidden(
                "client_secret",
                |r| &r.client_secret,
                |r| &mut r.client_secret,
            ),
        ]
    }
}

///
/// OAuthClientCredentialsMapper
///

pub struct OAuthClientCredentialsMapper;

impl OAuthClientCredentialsMapper {
    pub fn expand(map: &TreeMap) -> MapResult<OAuthClientCredentials> {
        super::expand(map, &Scope::root())
    }

    pub fn expand_with(map: &TreeMap, config: &ConfigModel) -> MapResult<OAuthClientCredentials> {
        super::expand_with(map, config)
    }

    /// Expand from the list-of-one encoding used when nested in another resource.
    pub fn expand_nested(
        value: Option<&Value>,
        scope: &Scope,
    ) -> MapResult<Option<OAuthClientCredentials>> {
        RecordMapper::expand_one(value, scope)
    }

    #[must_use]
    pub fn flatten(model: &OAuthClientCredentials) -> TreeMap {
        super::flatten(model)
    }

    #[must_use]
    pub fn flatten_nested(model: Option<&OAuthClientCredentials>) -> Value {
        RecordMapper::flatten_one(model)
    }

    #[must_use]
    pub fn read(model: &OAuthClientCredentials, prior: &TreeMap) -> TreeMap {
        super::read(model, prior)
    }
}

///
/// TESTS
///
