use crate::model::{PolicyItem, prelude::*};

///
/// RuleSet
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuleSet {
    pub name: Option<String>,
    pub element_type: Option<String>,
    pub success_criteria: Option<String>,
    pub policy: Vec<PolicyItem>,
}
