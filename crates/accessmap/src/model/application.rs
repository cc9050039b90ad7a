use crate::model::{Policy, prelude::*};

///
/// Application
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Application {
    pub name: Option<String>,
    pub description: Option<String>,
    pub context_root: Option<String>,
    pub default_auth_type: Option<String>,
    pub destination: Option<String>,
    pub application_type: Option<String>,
    pub realm: Option<String>,

    // references
    pub agent_id: Option<Id>,
    pub site_id: Option<Id>,
    pub web_session_id: Option<Id>,
    pub virtual_host_ids: Vec<Id>,

    // switches
    pub enabled: Option<bool>,
    pub case_sensitive_path: Option<bool>,
    pub require_https: Option<bool>,
    pub spa_support_enabled: Option<bool>,

    pub policy: Policy,
}
