use crate::model::prelude::*;
use derive_more::Display;
use std::collections::BTreeMap;

/// Policy entries keyed by the surface they protect.
pub type Policy = BTreeMap<PolicyGroup, Vec<PolicyItem>>;

///
/// PolicyGroup
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum PolicyGroup {
    #[display("API")]
    #[serde(rename = "API")]
    Api,

    #[display("Web")]
    #[serde(rename = "Web")]
    Web,
}

///
/// PolicyItemType
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum PolicyItemType {
    Rule,
    RuleSet,
}

impl PolicyItemType {
    pub const ALL: &'static [&'static str] = &["Rule", "RuleSet"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rule => "Rule",
            Self::RuleSet => "RuleSet",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Rule" => Some(Self::Rule),
            "RuleSet" => Some(Self::RuleSet),
            _ => None,
        }
    }
}

///
/// PolicyItem
///
/// Reference to a rule or rule set by id.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PolicyItem {
    pub id: Id,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<PolicyItemType>,
}

impl PolicyItem {
    #[must_use]
    pub const fn new(id: Id, item_type: PolicyItemType) -> Self {
        Self {
            id,
            item_type: Some(item_type),
        }
    }
}

///
/// TESTS
///
