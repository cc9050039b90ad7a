use crate::{
    error::{MapResult, MappingError},
    log,
    log::Topic,
    tree::{self, Scope, TreeMap},
};
use serde_json::Value;

///
/// Variant
///
/// A closed sum type stored in the CT as an object whose discriminator member
/// names the case. Payload members sit beside the discriminator.
///

pub trait Variant: Sized + 'static {
    /// Discriminator member name.
    const TAG: &'static str = "type";

    /// Discriminator values this type understands, in declaration order.
    const KNOWN: &'static [&'static str];

    /// Build the case named by `tag`. Only called with a member of `KNOWN`.
    fn expand_variant(tag: &str, map: &TreeMap, scope: &Scope) -> MapResult<Self>;

    /// Flatten the payload including the discriminator member.
    fn flatten_variant(&self) -> TreeMap;
}

///
/// VariantMapper
///

pub struct VariantMapper;

impl VariantMapper {
    /// Expand a list of tagged objects, preserving order.
    pub fn expand_sequence<V: Variant>(value: Option<&Value>, scope: &Scope) -> MapResult<Vec<V>> {
        let items = tree::list_items(value, scope)?;

        log!(
            Topic::Variant,
            Debug,
            "{}: expanding {} element(s)",
            scope.path(),
            items.len()
        );

        items
            .iter()
            .enumerate()
            .map(|(i, item)| Self::expand_element(item, &scope.index(i)))
            .collect()
    }

    #[must_use]
    pub fn flatten_sequence<V: Variant>(items: &[V]) -> Value {
        Value::Array(
            items
                .iter()
                .map(|item| Value::Object(item.flatten_variant()))
                .collect(),
        )
    }

    /// Expand a single optional tagged object from the list-of-one encoding.
    pub fn expand_one<V: Variant>(value: Option<&Value>, scope: &Scope) -> MapResult<Option<V>> {
        tree::require_object(value, scope)?
            .map(|map| Self::expand_object(map, &scope.index(0)))
            .transpose()
    }

    #[must_use]
    pub fn flatten_one<V: Variant>(item: Option<&V>) -> Value {
        item.map_or_else(tree::empty_list, |v| tree::wrap_one(v.flatten_variant()))
    }

    /// Expand one list element; `scope` addresses the element itself.
    pub fn expand_element<V: Variant>(item: &Value, scope: &Scope) -> MapResult<V> {
        match item {
            Value::Object(map) => Self::expand_object(map, scope),
            other => Err(MappingError::field_type(
                scope.path(),
                "object",
                tree::kind_name(other),
            )),
        }
    }

    pub fn expand_object<V: Variant>(map: &TreeMap, scope: &Scope) -> MapResult<V> {
        match Self::discriminator::<V>(map, scope)? {
            Some(tag) if V::KNOWN.contains(&tag) => V::expand_variant(tag, map, scope),
            Some("") | None => Err(MappingError::shape(
                scope.field(V::TAG).path(),
                format!("missing discriminator '{}'", V::TAG),
            )),
            Some(tag) => Err(Self::unknown::<V>(tag, scope)),
        }
    }

    /// Error for a discriminator outside `V::KNOWN`.
    #[must_use]
    pub fn unknown<V: Variant>(tag: &str, scope: &Scope) -> MappingError {
        MappingError::unknown_variant(scope.field(V::TAG).path(), V::TAG, tag)
    }

    fn discriminator<'a, V: Variant>(
        map: &'a TreeMap,
        scope: &Scope,
    ) -> MapResult<Option<&'a str>> {
        match map.get(V::TAG) {
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            None | Some(Value::Null) => Ok(None),
            Some(other) => Err(MappingError::field_type(
                scope.field(V::TAG).path(),
                "string",
                tree::kind_name(other),
            )),
        }
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

    #[derive(Clone, Debug, Eq, PartialEq)]
    enum Shape {
        Circle { radius: String },
        Dot,
    }

    impl Variant for Shape {
        const TAG: &'static str = "kind";
        const KNOWN: &'static [&'static str] = &["circle", "dot"];

        fn expand_variant(tag: &str, map: &TreeMap, scope: &Scope) -> MapResult<Self> {
            match tag {
                "circle" => {
                    let radius = map
                        .get("radius")
                        .and_then(Value::as_str)
                        .ok_or_else(|| MappingError::shape(scope.field("radius").path(), "radius required"))?;
                    Ok(Self::Circle {
                        radius: radius.to_string(),
                    })
                }
                "dot" => Ok(Self::Dot),
                other => Err(VariantMapper::unknown::<Self>(other, scope)),
            }
        }

        fn flatten_variant(&self) -> TreeMap {
            let mut map = TreeMap::new();
            match self {
                Self::Circle { radius } => {
                    map.insert("kind".into(), json!("circle"));
                    map.insert("radius".into(), json!(radius));
                }
                Self::Dot => {
                    map.insert("kind".into(), json!("dot"));
                }
            }
            map
        }
    }

    fn scope() -> Scope {
        Scope::root().field("shapes")
    }

    #[test]
    fn sequence_preserves_order_and_case() {
        let ct = json!([
            { "kind": "dot" },
            { "kind": "circle", "radius": "2" },
            { "kind": "dot" }
        ]);

        let shapes: Vec<Shape> = VariantMapper::expand_sequence(Some(&ct), &scope()).unwrap();
        assert_eq!(
            shapes,
            vec![
                Shape::Dot,
                Shape::Circle {
                    radius: "2".into()
                },
                Shape::Dot
            ]
        );
        assert_eq!(VariantMapper::flatten_sequence(&shapes), ct);
    }

    #[test]
    fn unknown_discriminator_is_reported_with_path() {
        let ct = json!([{ "kind": "dot" }, { "kind": "square" }]);
        let err = VariantMapper::expand_sequence::<Shape>(Some(&ct), &scope()).unwrap_err();

        assert_eq!(
            err,
            MappingError::UnknownVariant {
                path: "shapes.1.kind".into(),
                tag: "kind",
                discriminator: "square".into(),
            }
        );
    }

    #[test]
    fn missing_discriminator_is_a_shape_error() {
        let ct = json!([{ "radius": "2" }]);
        let err = VariantMapper::expand_sequence::<Shape>(Some(&ct), &scope()).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Shape);
        assert_eq!(err.path(), "shapes.0.kind");
    }

    #[test]
    fn empty_discriminator_counts_as_missing() {
        let ct = json!([{ "kind": "dot" }, { "kind": "" }]);
        let err = VariantMapper::expand_sequence::<Shape>(Some(&ct), &scope()).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Shape);
        assert_eq!(err.path(), "shapes.1.kind");
    }

    #[test]
    fn non_object_element_is_a_field_type_error() {
        let ct = json!([{ "kind": "dot" }, "dot"]);
        let err = VariantMapper::expand_sequence::<Shape>(Some(&ct), &scope()).unwrap_err();
        assert_eq!(err.class(), ErrorClass::FieldType);
        assert_eq!(err.path(), "shapes.1");
    }

    #[test]
    fn single_variant_uses_list_of_one() {
        let ct = json!([{ "kind": "circle", "radius": "1" }]);
        let shape: Option<Shape> = VariantMapper::expand_one(Some(&ct), &scope()).unwrap();
        assert_eq!(VariantMapper::flatten_one(shape.as_ref()), ct);

        let none: Option<Shape> = VariantMapper::expand_one(Some(&json!([])), &scope()).unwrap();
        assert_eq!(none, None);
        assert_eq!(VariantMapper::flatten_one::<Shape>(None), json!([]));
    }

    #[test]
    fn empty_sequence_flattens_to_empty_list() {
        assert_eq!(VariantMapper::flatten_sequence::<Shape>(&[]), json!([]));
    }
}
