use crate::model::{Policy, PolicyGroup, PolicyItem, PolicyItemType};
use accessmap_core::{
    codec::{
        group::{GroupKey, GroupMapper},
        scalar::Scalar,
        variant::{Variant, VariantMapper},
    },
    error::{MapResult, MappingError},
    tree::{self, Scope, TreeMap},
    types::Id,
};
use serde_json::Value;

const ID: &str = "id";

impl GroupKey for PolicyGroup {
    const ALL: &'static [Self] = &[Self::Api, Self::Web];

    fn config_key(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Web => "web",
        }
    }
}

// Expand insists on a known type. An untyped item in the model still
// flattens, with `type = ""`, and is rejected if it comes back.
impl Variant for PolicyItem {
    const KNOWN: &'static [&'static str] = PolicyItemType::ALL;

    fn expand_variant(tag: &str, map: &TreeMap, scope: &Scope) -> MapResult<Self> {
        let id_scope = scope.field(ID);
        let raw = match map.get(ID) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            other => {
                return Err(MappingError::field_type(
                    id_scope.path(),
                    Id::EXPECTED,
                    other.map_or("nothing", tree::kind_name),
                ));
            }
        };

        let id = raw.parse::<Id>().map_err(|_| {
            MappingError::field_type(id_scope.path(), Id::EXPECTED, format!("'{raw}'"))
        })?;

        Ok(Self {
            id,
            item_type: PolicyItemType::from_tag(tag),
        })
    }

    fn flatten_variant(&self) -> TreeMap {
        let mut map = TreeMap::new();
        map.insert(ID.to_string(), Value::String(self.id.to_string()));
        map.insert(
            Self::TAG.to_string(),
            Value::String(self.item_type.map_or("", PolicyItemType::as_str).to_string()),
        );

        map
    }
}

///
/// PolicyItemMapper
///

pub struct PolicyItemMapper;

impl PolicyItemMapper {
    pub fn expand(value: Option<&Value>, scope: &Scope) -> MapResult<Vec<PolicyItem>> {
        VariantMapper::expand_sequence(value, scope)
    }

    #[must_use]
    pub fn flatten(items: &[PolicyItem]) -> Value {
        VariantMapper::flatten_sequence(items)
    }
}

///
/// PolicyMapper
///

pub struct PolicyMapper;

impl PolicyMapper {
    /// Expand the nested `[{ api: [...], web: [...] }]` shape.
    pub fn expand(value: Option<&Value>, scope: &Scope) -> MapResult<Policy> {
        GroupMapper::expand_groups(value, scope)
    }

    #[must_use]
    pub fn flatten(policy: &Policy) -> Value {
        GroupMapper::flatten_groups(policy)
    }

    /// Expand the flat `[{ group, id, type }]` shape.
    pub fn expand_annotated(value: Option<&Value>, scope: &Scope) -> MapResult<Policy> {
        GroupMapper::expand_annotated(value, scope)
    }

    #[must_use]
    pub fn flatten_annotated(policy: &Policy) -> Value {
        GroupMapper::flatten_annotated(policy)
    }
}

///
/// TESTS
///
