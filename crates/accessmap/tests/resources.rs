//! Whole-resource expand, flatten and read through the kind dispatcher.

use accessmap::{
    codec::hidden::HiddenField,
    config::{ConfigModel, schema::UnknownKeys},
    error::ErrorClass,
    mapper::{ApplicationMapper, RuleSetMapper, WebSessionMapper},
    model::{OAuthClientCredentials, PolicyGroup, PolicyItemType, WebSession},
    resource::{Resource, ResourceKind, ResourceMapper},
    tree::TreeMap,
    types::Id,
};
use serde_json::{Value, json};

fn object(value: Value) -> TreeMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

fn web_session_ct() -> TreeMap {
    object(json!({
        "name": "portal",
        "audience": "portal-users",
        "client_credentials": [{
            "client_id": "pa-client",
            "client_secret": [{ "value": "s3cret" }]
        }],
        "cookie_type": "Encrypted",
        "http_only_cookie": "true",
        "secure_cookie": true,
        "idle_timeout_in_minutes": "60",
        "session_timeout_in_minutes": 240,
        "scopes": ["openid", "profile", "email"],
        "oidc_login_type": "Code",
        "pkce_challenge_type": "SHA256"
    }))
}

fn application_ct() -> TreeMap {
    object(json!({
        "name": "billing",
        "context_root": "/billing",
        "default_auth_type": "Web",
        "virtual_host_ids": ["2", "1"],
        "destination": "Site",
        "site_id": "18446744073709551616",
        "enabled": true,
        "policy": [{
            "api": [{ "id": "4", "type": "RuleSet" }],
            "web": [{ "id": "1334", "type": "Rule" }, { "id": "7", "type": "Rule" }]
        }]
    }))
}

#[test]
fn web_session_expands_every_field_kind() {
    let session = WebSessionMapper::expand(&web_session_ct()).unwrap();

    assert_eq!(session.name.as_deref(), Some("portal"));
    assert_eq!(session.http_only_cookie, Some(true));
    assert_eq!(session.idle_timeout_in_minutes, Some("60".parse().unwrap()));
    assert_eq!(session.session_timeout_in_minutes, Some("240".parse().unwrap()));
    assert_eq!(session.scopes, ["openid", "profile", "email"]);
    assert_eq!(session.web_storage_type, None);

    let creds = session.client_credentials.unwrap();
    assert_eq!(creds.client_secret, Some(HiddenField::plaintext("s3cret")));
}

#[test]
fn web_session_requires_credentials() {
    let mut ct = web_session_ct();
    ct.insert("client_credentials".into(), json!([]));

    let err = WebSessionMapper::expand(&ct).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Shape);
    assert_eq!(err.path(), "client_credentials");
}

#[test]
fn web_session_timeout_is_never_rounded() {
    let mut ct = web_session_ct();
    ct.insert(
        "idle_timeout_in_minutes".into(),
        json!("0.12345678901234567890123456789012"),
    );
    let err = WebSessionMapper::expand(&ct).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Parse);
    assert_eq!(err.path(), "idle_timeout_in_minutes");

    ct.insert(
        "idle_timeout_in_minutes".into(),
        json!("0.1234567890123456789012345678"),
    );
    let session = WebSessionMapper::expand(&ct).unwrap();
    let flat = WebSessionMapper::flatten(&session);
    assert_eq!(flat["idle_timeout_in_minutes"], json!("0.1234567890123456789012345678"));
}

#[test]
fn web_session_read_keeps_configured_secret() {
    let prior = web_session_ct();
    let mut reported = WebSessionMapper::expand(&prior).unwrap();
    reported.client_credentials = Some(OAuthClientCredentials {
        client_id: Some("pa-client".into()),
        client_secret: Some(HiddenField {
            value: None,
            encrypted_value: Some("OBF:AES:abc".into()),
        }),
    });

    let read = WebSessionMapper::read(&reported, &prior);
    assert_eq!(
        read["client_credentials"],
        json!([{ "client_id": "pa-client", "client_secret": [{ "value": "s3cret" }] }])
    );

    let plain = WebSessionMapper::flatten(&reported);
    assert_eq!(
        plain["client_credentials"][0]["client_secret"],
        json!([{ "value": null }])
    );
    assert!(!serde_json::to_string(&plain).unwrap().contains("OBF"));
}

#[test]
fn application_keeps_order_precision_and_groups() {
    let app = ApplicationMapper::expand(&application_ct()).unwrap();

    assert_eq!(app.virtual_host_ids, [Id::from(2), Id::from(1)]);
    assert_eq!(
        app.site_id.as_ref().map(ToString::to_string).as_deref(),
        Some("18446744073709551616")
    );

    let web = &app.policy[&PolicyGroup::Web];
    assert_eq!(web.len(), 2);
    assert_eq!(web[0].id, Id::from(1334));
    assert_eq!(web[1].id, Id::from(7));
    assert_eq!(app.policy[&PolicyGroup::Api][0].item_type, Some(PolicyItemType::RuleSet));
}

#[test]
fn application_flatten_then_expand_is_a_fixed_point() {
    let app = ApplicationMapper::expand(&application_ct()).unwrap();
    let flat = ApplicationMapper::flatten(&app);

    assert_eq!(flat["description"], Value::Null);
    assert_eq!(flat["virtual_host_ids"], json!(["2", "1"]));
    assert_eq!(ApplicationMapper::expand(&flat).unwrap(), app);
}

#[test]
fn application_policy_error_carries_flatmap_path() {
    let mut ct = application_ct();
    ct.insert(
        "policy".into(),
        json!([{ "api": [{ "id": "1", "type": "Rule" }, { "id": "x1", "type": "Rule" }] }]),
    );

    let err = ApplicationMapper::expand(&ct).unwrap_err();
    assert_eq!(err.class(), ErrorClass::FieldType);
    assert_eq!(err.path(), "policy.0.api.1.id");
}

#[test]
fn application_strict_mode_rejects_unknown_members() {
    let mut ct = application_ct();
    ct.insert("identity_mapping_ids".into(), json!([]));

    let mut config = ConfigModel::default();
    assert!(ApplicationMapper::expand_with(&ct, &config).is_ok());

    config.expand.unknown_keys = UnknownKeys::Reject;
    let err = ApplicationMapper::expand_with(&ct, &config).unwrap_err();
    assert_eq!(err.path(), "identity_mapping_ids");
}

#[test]
fn sequence_limit_applies_to_policy_items() {
    let ct = object(json!({
        "name": "many",
        "policy": [
            { "id": "1", "type": "Rule" },
            { "id": "2", "type": "Rule" },
            { "id": "3", "type": "Rule" }
        ]
    }));

    let mut config = ConfigModel::default();
    config.expand.max_sequence_len = 2;

    let err = RuleSetMapper::expand_with(&ct, &config).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Shape);
    assert_eq!(err.path(), "policy");
}

#[test]
fn dispatcher_routes_by_kind_name() {
    let kind: ResourceKind = "web_session".parse().unwrap();
    let resource = ResourceMapper::expand(kind, &web_session_ct()).unwrap();

    assert_eq!(resource.kind(), ResourceKind::WebSession);
    let Resource::WebSession(session) = &resource else {
        panic!("expected a web session");
    };
    assert_eq!(session.audience.as_deref(), Some("portal-users"));

    let flat = ResourceMapper::flatten(&resource);
    assert_eq!(flat["scopes"], json!(["openid", "profile", "email"]));
    assert_eq!(
        ResourceMapper::read(&resource, &web_session_ct()),
        WebSessionMapper::read(session, &web_session_ct())
    );
}

#[test]
fn dispatcher_surfaces_mapping_errors() {
    let err = ResourceMapper::expand(ResourceKind::Rule, &object(json!({ "name": "r" })))
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Shape);
    assert_eq!(err.path(), "configuration");

    let config = ConfigModel::default();
    let ok = ResourceMapper::expand_with(ResourceKind::WebSession, &web_session_ct(), &config);
    assert!(ok.is_ok());
}

#[test]
fn web_session_serializes_camel_case_for_the_api() {
    let session = WebSession {
        name: Some("portal".into()),
        idle_timeout_in_minutes: Some("60".parse().unwrap()),
        ..WebSession::default()
    };

    let json = serde_json::to_value(&session).unwrap();
    assert_eq!(json["name"], json!("portal"));
    assert_eq!(json["idleTimeoutInMinutes"], json!("60"));
    assert!(json.get("idle_timeout_in_minutes").is_none());
}
