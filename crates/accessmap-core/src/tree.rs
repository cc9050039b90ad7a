//!
//! Configuration-tree helpers.
//!
//! The configuration framework hands us `serde_json::Value` trees in which an
//! optional nested object is encoded as a zero-or-one element list. That
//! convention is decoded and encoded here and nowhere else, so the codecs work
//! with `Option<&TreeMap>` instead of reasoning about list lengths.
//!

use crate::{
    config::{Config, ConfigModel},
    error::{MapResult, MappingError},
};
use serde_json::Value;
use std::{fmt, sync::Arc};

/// A configuration-tree object.
pub type TreeMap = serde_json::Map<String, Value>;

///
/// Path
///
/// Flat-map address of a CT member, e.g. `policy.0.api.3.id`.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Path(String);

impl Path {
    #[must_use]
    pub fn root(name: &str) -> Self {
        Self(name.to_string())
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self::root(name)
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.field(&index.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0)
        }
    }
}

///
/// Scope
///
/// Position and settings threaded through one expand call.
///

#[derive(Clone, Debug)]
pub struct Scope {
    path: Path,
    config: Arc<ConfigModel>,
}

impl Scope {
    /// Root scope using the process-wide configuration.
    #[must_use]
    pub fn root() -> Self {
        Self::with_config(Config::current())
    }

    #[must_use]
    pub fn with_config(config: Arc<ConfigModel>) -> Self {
        Self {
            path: Path(String::new()),
            config,
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Self {
        Self {
            path: self.path.field(name),
            config: Arc::clone(&self.config),
        }
    }

    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self {
            path: self.path.index(index),
            config: Arc::clone(&self.config),
        }
    }

    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn config(&self) -> &ConfigModel {
        &self.config
    }
}

///
/// ListOfOne
///
/// Decoded view of an optional nested object.
///

#[derive(Debug)]
pub enum ListOfOne<'a> {
    Absent,
    Present(&'a TreeMap),
    Malformed(&'static str),
}

/// Decode the list-of-one convention.
///
/// A missing member, `null`, `[]` and `[null]` are all absent. A bare object is
/// accepted as if it were wrapped. Extra list elements past the first are
/// ignored.
#[must_use]
pub fn list_of_one(value: Option<&Value>) -> ListOfOne<'_> {
    match value {
        None | Some(Value::Null) => ListOfOne::Absent,
        Some(Value::Object(map)) => ListOfOne::Present(map),
        Some(Value::Array(items)) => match items.first() {
            None | Some(Value::Null) => ListOfOne::Absent,
            Some(Value::Object(map)) => ListOfOne::Present(map),
            Some(other) => ListOfOne::Malformed(kind_name(other)),
        },
        Some(other) => ListOfOne::Malformed(kind_name(other)),
    }
}

/// Decode the list-of-one convention, failing on a malformed shape.
pub fn require_object<'a>(value: Option<&'a Value>, scope: &Scope) -> MapResult<Option<&'a TreeMap>> {
    match list_of_one(value) {
        ListOfOne::Absent => Ok(None),
        ListOfOne::Present(map) => Ok(Some(map)),
        ListOfOne::Malformed(found) => Err(MappingError::field_type(
            scope.path(),
            "list of one object",
            found,
        )),
    }
}

/// Encode an object with the list-of-one convention.
#[must_use]
pub fn wrap_one(map: TreeMap) -> Value {
    Value::Array(vec![Value::Object(map)])
}

/// Encode an absent optional object.
#[must_use]
pub const fn empty_list() -> Value {
    Value::Array(Vec::new())
}

/// Borrow the elements of a CT list. Missing and `null` read as empty.
pub fn list_items<'a>(value: Option<&'a Value>, scope: &Scope) -> MapResult<&'a [Value]> {
    match value {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => {
            let limit = scope.config().expand.max_sequence_len;
            if items.len() > limit {
                return Err(MappingError::shape(
                    scope.path(),
                    format!("{} elements exceed the limit of {limit}", items.len()),
                ));
            }

            Ok(items)
        }
        Some(other) => Err(MappingError::field_type(scope.path(), "list", kind_name(other))),
    }
}

/// True when a CT member carries no configuration at all.
#[must_use]
pub fn is_unset(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Array(items)) => items.iter().all(Value::is_null),
        Some(_) => false,
    }
}

#[must_use]
pub const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorClass;
    use serde_json::json;

    #[test]
    fn path_uses_flatmap_addressing() {
        let p = Path::root("policy").index(0).field("api").index(3).field("id");
        assert_eq!(p.as_str(), "policy.0.api.3.id");
        assert_eq!(Path::default().to_string(), "<root>");
        assert_eq!(Path::default().field("name").as_str(), "name");
    }

    #[test]
    fn list_of_one_decodes_every_absent_form() {
        for value in [json!(null), json!([]), json!([null])] {
            assert!(matches!(list_of_one(Some(&value)), ListOfOne::Absent));
        }
        assert!(matches!(list_of_one(None), ListOfOne::Absent));
    }

    #[test]
    fn list_of_one_accepts_wrapped_and_bare_objects() {
        let wrapped = json!([{ "value": "a" }]);
        let bare = json!({ "value": "a" });
        assert!(matches!(list_of_one(Some(&wrapped)), ListOfOne::Present(_)));
        assert!(matches!(list_of_one(Some(&bare)), ListOfOne::Present(_)));
    }

    #[test]
    fn require_object_reports_malformed_shape() {
        let scope = Scope::root().field("client_credentials");
        let err = require_object(Some(&json!(["oops"])), &scope).unwrap_err();
        assert_eq!(err.class(), ErrorClass::FieldType);
        assert_eq!(err.path(), "client_credentials");
    }

    #[test]
    fn list_items_enforces_sequence_limit() {
        let mut cfg = ConfigModel::default();
        cfg.expand.max_sequence_len = 2;
        let scope = Scope::with_config(Arc::new(cfg)).field("scopes");

        assert_eq!(list_items(Some(&json!(["a", "b"])), &scope).unwrap().len(), 2);
        let err = list_items(Some(&json!(["a", "b", "c"])), &scope).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Shape);
    }

    #[test]
    fn is_unset_treats_empty_list_as_unset() {
        assert!(is_unset(None));
        assert!(is_unset(Some(&json!([]))));
        assert!(!is_unset(Some(&json!(""))));
        assert!(!is_unset(Some(&json!([{}]))));
    }
}
