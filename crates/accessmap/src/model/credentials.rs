use crate::model::prelude::*;

///
/// OAuthClientCredentials
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OAuthClientCredentials {
    pub client_id: Option<String>,
    pub client_secret: Option<HiddenField>,
}
