use crate::{
    mapper::{
        ApplicationMapper, OAuthClientCredentialsMapper, RuleMapper, RuleSetMapper,
        WebSessionMapper,
    },
    model::{Application, OAuthClientCredentials, Rule, RuleSet, WebSession},
};
use accessmap_core::{config::ConfigModel, error::MapResult, log, log::Topic, tree::TreeMap};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// ResourceKindError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ResourceKindError {
    #[error("unknown resource kind '{0}'")]
    Unknown(String),
}

///
/// ResourceKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum ResourceKind {
    #[display("application")]
    Application,

    #[display("oauth_client_credentials")]
    #[serde(rename = "oauth_client_credentials")]
    OAuthClientCredentials,

    #[display("rule")]
    Rule,

    #[display("rule_set")]
    RuleSet,

    #[display("web_session")]
    WebSession,
}

impl ResourceKind {
    pub const ALL: &'static [Self] = &[
        Self::Application,
        Self::OAuthClientCredentials,
        Self::Rule,
        Self::RuleSet,
        Self::WebSession,
    ];
}

impl FromStr for ResourceKind {
    type Err = ResourceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.to_string() == s)
            .ok_or_else(|| ResourceKindError::Unknown(s.to_string()))
    }
}

///
/// Resource
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum Resource {
    Application(Application),
    OAuthClientCredentials(OAuthClientCredentials),
    Rule(Rule),
    RuleSet(RuleSet),
    WebSession(WebSession),
}

impl Resource {
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Application(_) => ResourceKind::Application,
            Self::OAuthClientCredentials(_) => ResourceKind::OAuthClientCredentials,
            Self::Rule(_) => ResourceKind::Rule,
            Self::RuleSet(_) => ResourceKind::RuleSet,
            Self::WebSession(_) => ResourceKind::WebSession,
        }
    }
}

///
/// ResourceMapper
///
/// Kind-dispatched entry point for callers holding a kind name and a tree.
///

pub struct ResourceMapper;

impl ResourceMapper {
    pub fn expand(kind: ResourceKind, map: &TreeMap) -> MapResult<Resource> {
        log!(Topic::Resource, Debug, "expand {kind}");

        let resource = match kind {
            ResourceKind::Application => Resource::Application(ApplicationMapper::expand(map)?),
            ResourceKind::OAuthClientCredentials => {
                Resource::OAuthClientCredentials(OAuthClientCredentialsMapper::expand(map)?)
            }
            ResourceKind::Rule => Resource::Rule(RuleMapper::expand(map)?),
            ResourceKind::RuleSet => Resource::RuleSet(RuleSetMapper::expand(map)?),
            ResourceKind::WebSession => Resource::WebSession(WebSessionMapper::expand(map)?),
        };

        Ok(resource)
    }

    pub fn expand_with(
        kind: ResourceKind,
        map: &TreeMap,
        config: &ConfigModel,
    ) -> MapResult<Resource> {
        log!(Topic::Resource, Debug, "expand {kind} (explicit config)");

        let resource = match kind {
            ResourceKind::Application => {
                Resource::Application(ApplicationMapper::expand_with(map, config)?)
            }
            ResourceKind::OAuthClientCredentials => Resource::OAuthClientCredentials(
                OAuthClientCredentialsMapper::expand_with(map, config)?,
            ),
            ResourceKind::Rule => Resource::Rule(RuleMapper::expand_with(map, config)?),
            ResourceKind::RuleSet => Resource::RuleSet(RuleSetMapper::expand_with(map, config)?),
            ResourceKind::WebSession => {
                Resource::WebSession(WebSessionMapper::expand_with(map, config)?)
            }
        };

        Ok(resource)
    }

    #[must_use]
    pub fn flatten(resource: &Resource) -> TreeMap {
        match resource {
            Resource::Application(model) => ApplicationMapper::flatten(model),
            Resource::OAuthClientCredentials(model) => OAuthClientCredentialsMapper::flatten(model),
            Resource::Rule(model) => RuleMapper::flatten(model),
            Resource::RuleSet(model) => RuleSetMapper::flatten(model),
            Resource::WebSession(model) => WebSessionMapper::flatten(model),
        }
    }

    /// Flatten a server response against the previously configured tree.
    #[must_use]
    pub fn read(resource: &Resource, prior: &TreeMap) -> TreeMap {
        match resource {
            Resource::Application(model) => ApplicationMapper::read(model, prior),
            Resource::OAuthClientCredentials(model) => {
                OAuthClientCredentialsMapper::read(model, prior)
            }
            Resource::Rule(model) => RuleMapper::read(model, prior),
            Resource::RuleSet(model) => RuleSetMapper::read(model, prior),
            Resource::WebSession(model) => WebSessionMapper::read(model, prior),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.to_string().parse::<ResourceKind>(), Ok(*kind));
        }
    }

    #[test]
    fn unknown_kind_is_reported() {
        assert_eq!(
            "virtual_host".parse::<ResourceKind>(),
            Err(ResourceKindError::Unknown("virtual_host".into()))
        );
    }

    #[test]
    fn kind_serializes_as_display_name() {
        let json = serde_json::to_value(ResourceKind::RuleSet).unwrap();
        assert_eq!(json, serde_json::json!("rule_set"));

        let json = serde_json::to_value(ResourceKind::OAuthClientCredentials).unwrap();
        assert_eq!(json, serde_json::json!("oauth_client_credentials"));
    }
}
