use crate::model::{
    CidrRule, GroovyRule, HttpRequestHeaderRule, RateLimitingRule, Rule, RuleConfiguration,
    WebSessionAttributeRule,
};
use accessmap_core::{
    codec::{
        record::{Field, Record, RecordMapper},
        variant::{Variant, VariantMapper},
    },
    config::ConfigModel,
    error::MapResult,
    tree::{Scope, TreeMap},
};
use serde_json::Value;

impl Record for Rule {
    const NAME: &'static str = "Rule";
    const REQUIRED: &'static [&'static str] = &["name", "configuration"];

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar("name", |r| &r.name, |r| &mut r.name),
            Field::list(
                "supported_destinations",
                |r| &r.supported_destinations,
                |r| &mut r.supported_destinations,
            ),
            Field::variant("configuration", |r| &r.configuration, |r| &mut r.configuration),
        ]
    }
}

impl Variant for RuleConfiguration {
    const KNOWN: &'static [&'static str] = &[
        Self::CIDR,
        Self::GROOVY,
        Self::HTTP_REQUEST_HEADER,
        Self::RATE_LIMITING,
        Self::WEB_SESSION_ATTRIBUTE,
    ];

    fn expand_variant(tag: &str, map: &TreeMap, scope: &Scope) -> MapResult<Self> {
        let config = match tag {
            Self::CIDR => Self::Cidr(payload(map, scope)?),
            Self::GROOVY => Self::Groovy(payload(map, scope)?),
            Self::HTTP_REQUEST_HEADER => Self::HttpRequestHeader(payload(map, scope)?),
            Self::RATE_LIMITING => Self::RateLimiting(payload(map, scope)?),
            Self::WEB_SESSION_ATTRIBUTE => Self::WebSessionAttribute(payload(map, scope)?),
            other => return Err(VariantMapper::unknown::<Self>(other, scope)),
        };

        Ok(config)
    }

    fn flatten_variant(&self) -> TreeMap {
        let payload = match self {
            Self::Cidr(rule) => RecordMapper::flatten_fields(rule),
            Self::Groovy(rule) => RecordMapper::flatten_fields(rule),
            Self::HttpRequestHeader(rule) => RecordMapper::flatten_fields(rule),
            Self::RateLimiting(rule) => RecordMapper::flatten_fields(rule),
            Self::WebSessionAttribute(rule) => RecordMapper::flatten_fields(rule),
        };

        let mut map = TreeMap::new();
        map.insert(Self::TAG.to_string(), Value::String(self.tag().to_string()));
        map.extend(payload);

        map
    }
}

// discriminator shares the payload object
fn payload<R: Record>(map: &TreeMap, scope: &Scope) -> MapResult<R> {
    RecordMapper::expand_fields_except(map, scope, &[<RuleConfiguration as Variant>::TAG])
}

//
// Payload descriptors
//

impl Record for CidrRule {
    const NAME: &'static str = "CidrRule";
    const REQUIRED: &'static [&'static str] = &["cidr_notation"];

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar("cidr_notation", |r| &r.cidr_notation, |r| &mut r.cidr_notation),
            Field::scalar("negate", |r| &r.negate, |r| &mut r.negate),
            Field::scalar(
                "override_ip_source",
                |r| &r.override_ip_source,
                |r| &mut r.override_ip_source,
            ),
            Field::list("headers", |r| &r.headers, |r| &mut r.headers),
            Field::scalar(
                "fallback_to_last_hop_ip",
                |r| &r.fallback_to_last_hop_ip,
                |r| &mut r.fallback_to_last_hop_ip,
            ),
            Field::scalar(
                "error_response_code",
                |r| &r.error.error_response_code,
                |r| &mut r.error.error_response_code,
            ),
            Field::scalar(
                "error_response_status_msg",
                |r| &r.error.error_response_status_msg,
                |r| &mut r.error.error_response_status_msg,
            ),
            Field::scalar(
                "error_response_template_file",
                |r| &r.error.error_response_template_file,
                |r| &mut r.error.error_response_template_file,
            ),
            Field::scalar(
                "error_response_content_type",
                |r| &r.error.error_response_content_type,
                |r| &mut r.error.error_response_content_type,
            ),
        ]
    }
}

impl Record for GroovyRule {
    const NAME: &'static str = "GroovyRule";
    const REQUIRED: &'static [&'static str] = &["groovy_script"];

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar("groovy_script", |r| &r.groovy_script, |r| &mut r.groovy_script),
            Field::scalar(
                "error_response_code",
                |r| &r.error.error_response_code,
                |r| &mut r.error.error_response_code,
            ),
            Field::scalar(
                "error_response_status_msg",
                |r| &r.error.error_response_status_msg,
                |r| &mut r.error.error_response_status_msg,
            ),
            Field::scalar(
                "error_response_template_file",
                |r| &r.error.error_response_template_file,
                |r| &mut r.error.error_response_template_file,
            ),
            Field::scalar(
                "error_response_content_type",
                |r| &r.error.error_response_content_type,
                |r| &mut r.error.error_response_content_type,
            ),
        ]
    }
}

impl Record for HttpRequestHeaderRule {
    const NAME: &'static str = "HttpRequestHeaderRule";
    const REQUIRED: &'static [&'static str] = &["header_name"];

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar("header_name", |r| &r.header_name, |r| &mut r.header_name),
            Field::list("header_values", |r| &r.header_values, |r| &mut r.header_values),
            Field::scalar("case_sensitive", |r| &r.case_sensitive, |r| &mut r.case_sensitive),
            Field::scalar("negate", |r| &r.negate, |r| &mut r.negate),
            Field::scalar(
                "error_response_code",
                |r| &r.error.error_response_code,
                |r| &mut r.error.error_response_code,
            ),
            Field::scalar(
                "error_response_status_msg",
                |r| &r.error.error_response_status_msg,
                |r| &mut r.error.error_response_status_msg,
            ),
            Field::scalar(
                "error_response_template_file",
                |r| &r.error.error_response_template_file,
                |r| &mut r.error.error_response_template_file,
            ),
            Field::scalar(
                "error_response_content_type",
                |r| &r.error.error_response_content_type,
                |r| &mut r.error.error_response_content_type,
            ),
        ]
    }
}

impl Record for RateLimitingRule {
    const NAME: &'static str = "RateLimitingRule";
    const REQUIRED: &'static [&'static str] = &["max_burst_requests", "requests_per_second"];

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar(
                "max_burst_requests",
                |r| &r.max_burst_requests,
                |r| &mut r.max_burst_requests,
            ),
            Field::scalar(
                "requests_per_second",
                |r| &r.requests_per_second,
                |r| &mut r.requests_per_second,
            ),
            Field::scalar(
                "policy_granularity",
                |r| &r.policy_granularity,
                |r| &mut r.policy_granularity,
            ),
            Field::scalar(
                "rate_limiting_header_name",
                |r| &r.rate_limiting_header_name,
                |r| &mut r.rate_limiting_header_name,
            ),
            Field::scalar(
                "error_response_code",
                |r| &r.error.error_response_code,
                |r| &mut r.error.error_response_code,
            ),
            Field::scalar(
                "error_response_status_msg",
                |r| &r.error.error_response_status_msg,
                |r| &mut r.error.error_response_status_msg,
            ),
            Field::scalar(
                "error_response_template_file",
                |r| &r.error.error_response_template_file,
                |r| &mut r.error.error_response_template_file,
            ),
            Field::scalar(
                "error_response_content_type",
                |r| &r.error.error_response_content_type,
                |r| &mut r.error.error_response_content_type,
            ),
        ]
    }
}

impl Record for WebSessionAttributeRule {
    const NAME: &'static str = "WebSessionAttributeRule";
    const REQUIRED: &'static [&'static str] = &["attribute_name"];

    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::scalar("attribute_name", |r| &r.attribute_name, |r| &mut r.attribute_name),
            Field::list(
                "attribute_values",
                |r| &r.attribute_values,
                |r| &mut r.attribute_values,
            ),
            Field::scalar("negate", |r| &r.negate, |r| &mut r.negate),
            Field::scalar(
                "error_response_code",
                |r| &r.error.error_response_code,
                |r| &mut r.error.error_response_code,
            ),
            Field::scalar(
                "error_response_status_msg",
                |r| &r.error.error_response_status_msg,
                |r| &mut r.error.error_response_status_msg,
            ),
            Field::scalar(
                "error_response_template_file",
                |r| &r.error.error_response_template_file,
                |r| &mut r.error.error_response_template_file,
            ),
            Field::scalar(
                "error_response_content_type",
                |r| &r.error.error_response_content_type,
                |r| &mut r.error.error_response_content_type,
            ),
        ]
    }
}

///
/// RuleMapper
///

pub struct RuleMapper;

impl RuleMapper {
    pub fn expand(map: &TreeMap) -> MapResult<Rule> {
        super::expand(map, &Scope::root())
    }

    pub fn expand_with(map: &TreeMap, config: &ConfigModel) -> MapResult<Rule> {
        super::expand_with(map, config)
    }

    #[must_use]
    pub fn flatten(model: &Rule) -> TreeMap {
        super::flatten(model)
    }

    #[must_use]
    pub fn read(model: &Rule, prior: &TreeMap) -> TreeMap {
        super::read(model, prior)
    }
}

///
/// TESTS
///
