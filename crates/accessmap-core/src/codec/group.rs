//!
//! Keyed groups of variant sequences.
//!
//! Two CT shapes are supported. The nested shape wraps one object holding a
//! member per group key, `[{ "api": [...], "web": [...] }]`. The annotated
//! shape is a flat list whose elements name their group,
//! `[{ "group": "api", "id": "1", "type": "Rule" }]`.
//!

use crate::{
    codec::{
        check_unknown_keys,
        variant::{Variant, VariantMapper},
    },
    error::{MapResult, MappingError},
    tree::{self, Scope, TreeMap},
};
use serde_json::Value;
use std::collections::BTreeMap;

/// Variant sequences keyed by group.
pub type Groups<G, V> = BTreeMap<G, Vec<V>>;

///
/// GroupKey
///
/// A closed set of group names. Only the CT spelling lives here; how a
/// group is named in the RM is up to the type's own serde.
///

pub trait GroupKey: Copy + Ord + 'static {
    /// Every group, in flatten order.
    const ALL: &'static [Self];

    /// Member naming the group in the annotated shape.
    const ANNOTATION: &'static str = "group";

    fn config_key(self) -> &'static str;

    #[must_use]
    fn from_config_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.config_key() == key)
    }
}

///
/// GroupMapper
///

pub struct GroupMapper;

impl GroupMapper {
    /// Expand the nested shape. Unset groups are left out of the map.
    pub fn expand_groups<G: GroupKey, V: Variant>(
        value: Option<&Value>,
        scope: &Scope,
    ) -> MapResult<Groups<G, V>> {
        let mut groups = Groups::new();
        let Some(map) = tree::require_object(value, scope)? else {
            return Ok(groups);
        };

        let inner = scope.index(0);
        check_unknown_keys(map, |key| G::from_config_key(key).is_some(), &inner)?;

        for &group in G::ALL {
            let member = map.get(group.config_key());
            if tree::is_unset(member) {
                continue;
            }

            let items = VariantMapper::expand_sequence(member, &inner.field(group.config_key()))?;
            groups.insert(group, items);
        }

        Ok(groups)
    }

    /// Flatten to the nested shape. An empty map is `[]`; otherwise every
    /// declared group is present, empty ones as `[]`.
    #[must_use]
    pub fn flatten_groups<G: GroupKey, V: Variant>(groups: &Groups<G, V>) -> Value {
        if groups.is_empty() {
            return tree::empty_list();
        }

        let map: TreeMap = G::ALL
            .iter()
            .map(|group| {
                let items = groups.get(group).map_or(&[][..], Vec::as_slice);
                (
                    group.config_key().to_string(),
                    VariantMapper::flatten_sequence(items),
                )
            })
            .collect();

        tree::wrap_one(map)
    }

    /// Expand the annotated shape. Element order is kept within each group.
    pub fn expand_annotated<G: GroupKey, V: Variant>(
        value: Option<&Value>,
        scope: &Scope,
    ) -> MapResult<Groups<G, V>> {
        let mut groups: Groups<G, V> = Groups::new();

        for (i, item) in tree::list_items(value, scope)?.iter().enumerate() {
            let item_scope = scope.index(i);
            let Value::Object(map) = item else {
                return Err(MappingError::field_type(
                    item_scope.path(),
                    "object",
                    tree::kind_name(item),
                ));
            };

            let group = Self::annotation::<G>(map, &item_scope)?;
            let element = VariantMapper::expand_object(map, &item_scope)?;
            groups.entry(group).or_default().push(element);
        }

        Ok(groups)
    }

    /// Flatten to the annotated shape, groups in `G::ALL` order.
    #[must_use]
    pub fn flatten_annotated<G: GroupKey, V: Variant>(groups: &Groups<G, V>) -> Value {
        let items = G::ALL
            .iter()
            .filter_map(|group| groups.get(group).map(|items| (*group, items)))
            .flat_map(|(group, items)| {
                items.iter().map(move |item| {
                    let mut map = TreeMap::new();
                    map.insert(
                        G::ANNOTATION.to_string(),
                        Value::String(group.config_key().to_string()),
                    );
                    map.extend(item.flatten_variant());

                    Value::Object(map)
                })
            })
            .collect();

        Value::Array(items)
    }

    fn annotation<G: GroupKey>(map: &TreeMap, scope: &Scope) -> MapResult<G> {
        let label_scope = scope.field(G::ANNOTATION);

        match map.get(G::ANNOTATION) {
            Some(Value::String(key)) => G::from_config_key(key)
                .ok_or_else(|| MappingError::unknown_group(label_scope.path(), key.as_str())),
            None | Some(Value::Null) => Err(MappingError::shape(
                label_scope.path(),
                format!("missing group label '{}'", G::ANNOTATION),
            )),
            Some(other) => Err(MappingError::field_type(
                label_scope.path(),
                "string",
                tree::kind_name(other),
            )),
        }
    }
}

///
/// TESTS
///
