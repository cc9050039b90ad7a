//!
//! Secret-bearing fields.
//!
//! Plaintext flows from configuration to the server; the server's stored
//! ciphertext never flows back into configuration. Every function here is
//! total: secret fields are always optional, so malformed input degrades to
//! "not configured".
//!

use crate::{
    log,
    log::Topic,
    tree::{self, ListOfOne, TreeMap},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const VALUE: &str = "value";

///
/// HiddenField
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    // server-reported only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_value: Option<String>,
}

impl HiddenField {
    #[must_use]
    pub fn plaintext(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            encrypted_value: None,
        }
    }
}

///
/// HiddenFieldMapper
///

pub struct HiddenFieldMapper;

impl HiddenFieldMapper {
    /// Reads only `value`; any `encrypted_value` in the tree is ignored.
    #[must_use]
    pub fn expand(value: Option<&Value>) -> Option<HiddenField> {
        match tree::list_of_one(value) {
            ListOfOne::Present(map) => match map.get(VALUE) {
                Some(Value::String(s)) => Some(HiddenField::plaintext(s.clone())),
                // a present element without a string `value` is unset, not empty
                _ => None,
            },
            ListOfOne::Absent => None,
            ListOfOne::Malformed(found) => {
                log!(Topic::Hidden, Debug, "ignoring malformed hidden field ({found})");
                None
            }
        }
    }

    /// Emits `[{value}]`, or `[]` when the field is absent.
    #[must_use]
    pub fn flatten(field: Option<&HiddenField>) -> Value {
        field.map_or_else(tree::empty_list, |f| {
            Self::wrap(f.value.as_ref().map(|v| Value::String(v.clone())))
        })
    }

    /// Flatten for the read path, merged with the previously configured state.
    ///
    /// Servers report secrets as ciphertext only. When the reported field carries
    /// no plaintext, the plaintext from `prior` is kept so the framework does not
    /// see a change the user never made.
    #[must_use]
    pub fn read(field: Option<&HiddenField>, prior: Option<&Value>) -> Value {
        let Some(field) = field else {
            return tree::empty_list();
        };

        if let Some(v) = &field.value {
            return Self::wrap(Some(Value::String(v.clone())));
        }

        let configured = match tree::list_of_one(prior) {
            ListOfOne::Present(map) => map.get(VALUE).filter(|v| v.is_string()).cloned(),
            _ => None,
        };

        if configured.is_some() {
            log!(Topic::Hidden, Debug, "server withheld plaintext; keeping configured value");
        }

        Self::wrap(configured)
    }

    fn wrap(value: Option<Value>) -> Value {
        let mut map = TreeMap::new();
        map.insert(VALUE.to_string(), value.unwrap_or(Value::Null));

        tree::wrap_one(map)
    }
}

///
/// TESTS
///
