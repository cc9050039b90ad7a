use crate::{
    error::{MapResult, MappingError},
    tree::{self, Scope},
    types::{Decimal, Id},
};
use serde_json::Value;

///
/// Scalar
///
/// A primitive that occupies one CT leaf.
///

pub trait Scalar: Sized {
    /// Human-readable kind used in error messages.
    const EXPECTED: &'static str;

    /// Decode a present, non-null CT value.
    fn from_tree(value: &Value, scope: &Scope) -> MapResult<Self>;

    fn to_tree(&self) -> Value;
}

impl Scalar for String {
    const EXPECTED: &'static str = "string";

    fn from_tree(value: &Value, scope: &Scope) -> MapResult<Self> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(MappingError::field_type(
                scope.path(),
                Self::EXPECTED,
                tree::kind_name(other),
            )),
        }
    }

    fn to_tree(&self) -> Value {
        Value::String(self.clone())
    }
}

// flat-map storage renders booleans as "true"/"false"
impl Scalar for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_tree(value: &Value, scope: &Scope) -> MapResult<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) => match s.as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                raw => Err(MappingError::parse(scope.path(), raw, Self::EXPECTED)),
            },
            other => Err(MappingError::field_type(
                scope.path(),
                Self::EXPECTED,
                tree::kind_name(other),
            )),
        }
    }

    fn to_tree(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Scalar for Decimal {
    const EXPECTED: &'static str = "decimal number";

    fn from_tree(value: &Value, scope: &Scope) -> MapResult<Self> {
        let raw = numeric_text(value, scope, Self::EXPECTED)?;

        raw.parse()
            .map_err(|_| MappingError::parse(scope.path(), raw, Self::EXPECTED))
    }

    fn to_tree(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Scalar for Id {
    const EXPECTED: &'static str = "non-negative integer";

    fn from_tree(value: &Value, scope: &Scope) -> MapResult<Self> {
        let raw = numeric_text(value, scope, Self::EXPECTED)?;

        raw.parse()
            .map_err(|_| MappingError::parse(scope.path(), raw, Self::EXPECTED))
    }

    fn to_tree(&self) -> Value {
        Value::String(self.to_string())
    }
}

// Numbers normally arrive as decimal text; JSON numbers are read through
// their textual form so no float conversion happens.
fn numeric_text(value: &Value, scope: &Scope, expected: &'static str) -> MapResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(MappingError::field_type(
            scope.path(),
            expected,
            tree::kind_name(other),
        )),
    }
}

///
/// ScalarMapper
///

pub struct ScalarMapper;

impl ScalarMapper {
    /// A missing member or `null` expands to `None`.
    pub fn expand<T: Scalar>(value: Option<&Value>, scope: &Scope) -> MapResult<Option<T>> {
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(v) => T::from_tree(v, scope).map(Some),
        }
    }

    /// `None` flattens to `null`, the CT "unset" sentinel.
    #[must_use]
    pub fn flatten<T: Scalar>(value: Option<&T>) -> Value {
        value.map_or(Value::Null, Scalar::to_tree)
    }

    pub fn expand_list<T: Scalar>(value: Option<&Value>, scope: &Scope) -> MapResult<Vec<T>> {
        tree::list_items(value, scope)?
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let item_scope = scope.index(i);
                match item {
                    Value::Null => Err(MappingError::field_type(
                        item_scope.path(),
                        T::EXPECTED,
                        "null",
                    )),
                    v => T::from_tree(v, &item_scope),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn flatten_list<T: Scalar>(values: &[T]) -> Value {
        Value::Array(values.iter().map(Scalar::to_tree).collect())
    }
}

///
/// TESTS
///
