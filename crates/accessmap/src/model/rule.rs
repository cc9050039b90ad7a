use crate::model::prelude::*;

///
/// Rule
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rule {
    pub name: Option<String>,
    pub supported_destinations: Vec<String>,
    pub configuration: Option<RuleConfiguration>,
}

///
/// RuleConfiguration
///
/// The rule's evaluation strategy. The discriminator selects which attribute
/// set applies.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type")]
#[remain::sorted]
pub enum RuleConfiguration {
    #[serde(rename = "CIDR")]
    Cidr(CidrRule),
    Groovy(GroovyRule),
    HttpRequestHeader(HttpRequestHeaderRule),
    RateLimiting(RateLimitingRule),
    WebSessionAttribute(WebSessionAttributeRule),
}

impl RuleConfiguration {
    pub const CIDR: &'static str = "CIDR";
    pub const GROOVY: &'static str = "Groovy";
    pub const HTTP_REQUEST_HEADER: &'static str = "HttpRequestHeader";
    pub const RATE_LIMITING: &'static str = "RateLimiting";
    pub const WEB_SESSION_ATTRIBUTE: &'static str = "WebSessionAttribute";

    /// Discriminator value of this case.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Cidr(_) => Self::CIDR,
            Self::Groovy(_) => Self::GROOVY,
            Self::HttpRequestHeader(_) => Self::HTTP_REQUEST_HEADER,
            Self::RateLimiting(_) => Self::RATE_LIMITING,
            Self::WebSessionAttribute(_) => Self::WEB_SESSION_ATTRIBUTE,
        }
    }
}

///
/// ErrorResponse
///
/// Rejection settings shared by every rule type, flattened into each payload.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_response_code: Option<Decimal>,
    pub error_response_status_msg: Option<String>,
    pub error_response_template_file: Option<String>,
    pub error_response_content_type: Option<String>,
}

///
/// CidrRule
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CidrRule {
    pub cidr_notation: Option<String>,
    pub negate: Option<bool>,
    pub override_ip_source: Option<bool>,
    pub headers: Vec<String>,
    pub fallback_to_last_hop_ip: Option<bool>,

    #[serde(flatten)]
    pub error: ErrorResponse,
}

///
/// GroovyRule
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroovyRule {
    pub groovy_script: Option<String>,

    #[serde(flatten)]
    pub error: ErrorResponse,
}

///
/// HttpRequestHeaderRule
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpRequestHeaderRule {
    pub header_name: Option<String>,
    pub header_values: Vec<String>,
    pub case_sensitive: Option<bool>,
    pub negate: Option<bool>,

    #[serde(flatten)]
    pub error: ErrorResponse,
}

///
/// RateLimitingRule
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateLimitingRule {
    pub max_burst_requests: Option<Decimal>,
    pub requests_per_second: Option<Decimal>,
    pub policy_granularity: Option<String>,
    pub rate_limiting_header_name: Option<String>,

    #[serde(flatten)]
    pub error: ErrorResponse,
}

///
/// WebSessionAttributeRule
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebSessionAttributeRule {
    pub attribute_name: Option<String>,
    pub attribute_values: Vec<String>,
    pub negate: Option<bool>,

    #[serde(flatten)]
    pub error: ErrorResponse,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn configuration_is_internally_tagged_on_the_wire() {
        let config = RuleConfiguration::Cidr(CidrRule {
            cidr_notation: Some("10.0.0.0/8".into()),
            ..CidrRule::default()
        });

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], json!("CIDR"));
        assert_eq!(json["cidrNotation"], json!("10.0.0.0/8"));
        assert_eq!(json["errorResponseCode"], json!(null));
    }

    #[test]
    fn tag_matches_serde_name() {
        let config = RuleConfiguration::Groovy(GroovyRule::default());
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], json!(config.tag()));
    }
}
