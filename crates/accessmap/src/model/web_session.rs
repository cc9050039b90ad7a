use crate::model::{OAuthClientCredentials, prelude::*};

///
/// WebSession
///
/// Browser session settings for applications protected by an OpenID
/// Connect provider.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebSession {
    pub name: Option<String>,
    pub audience: Option<String>,
    pub client_credentials: Option<OAuthClientCredentials>,

    // cookie
    pub cookie_domain: Option<String>,
    pub cookie_type: Option<String>,
    pub http_only_cookie: Option<bool>,
    pub secure_cookie: Option<bool>,

    // lifetime
    pub idle_timeout_in_minutes: Option<Decimal>,
    pub session_timeout_in_minutes: Option<Decimal>,

    // provider
    pub scopes: Vec<String>,
    pub oidc_login_type: Option<String>,
    pub pkce_challenge_type: Option<String>,
    pub request_preservation_type: Option<String>,
    pub web_storage_type: Option<String>,
    pub send_requested_url_to_provider: Option<bool>,
    pub cache_user_attributes: Option<bool>,
}
