use crate::{
    codec::{
        check_unknown_keys,
        group::{GroupKey, GroupMapper},
        hidden::{HiddenField, HiddenFieldMapper},
        scalar::{Scalar, ScalarMapper},
        variant::{Variant, VariantMapper},
    },
    error::{MapResult, MappingError},
    tree::{self, Scope, TreeMap},
};
use derive_more::Display;
use serde_json::Value;
use std::collections::BTreeMap;

///
/// Record
///
/// A fixed-shape RM struct described by an ordered list of field descriptors.
/// Descriptor order is the key order of flattened output.
///

pub trait Record: Default + 'static {
    const NAME: &'static str;

    /// Members that must carry configuration; expand fails with a shape
    /// error when one is missing, `null` or `[]`.
    const REQUIRED: &'static [&'static str] = &[];

    fn fields() -> Vec<Field<Self>>;
}

///
/// FieldKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum FieldKind {
    #[display("{_0}")]
    Scalar(&'static str),
    #[display("list of {_0}")]
    List(&'static str),
    #[display("hidden")]
    Hidden,
    #[display("record {_0}")]
    Record(&'static str),
    #[display("variant")]
    Variant,
    #[display("variant sequence")]
    Variants,
    #[display("variant groups")]
    Groups,
}

///
/// Field
///

pub struct Field<R> {
    name: &'static str,
    kind: FieldKind,
    codec: Box<dyn FieldCodec<R>>,
}

impl<R: 'static> Field<R> {
    fn new(name: &'static str, kind: FieldKind, codec: Box<dyn FieldCodec<R>>) -> Self {
        Self { name, kind, codec }
    }

    #[must_use]
    pub fn scalar<T: Scalar + 'static>(
        name: &'static str,
        get: fn(&R) -> &Option<T>,
        get_mut: fn(&mut R) -> &mut Option<T>,
    ) -> Self {
        Self::new(
            name,
            FieldKind::Scalar(T::EXPECTED),
            Box::new(ScalarField(Access { get, get_mut })),
        )
    }

    #[must_use]
    pub fn list<T: Scalar + 'static>(
        name: &'static str,
        get: fn(&R) -> &Vec<T>,
        get_mut: fn(&mut R) -> &mut Vec<T>,
    ) -> Self {
        Self::new(
            name,
            FieldKind::List(T::EXPECTED),
            Box::new(ListField(Access { get, get_mut })),
        )
    }

    #[must_use]
    pub fn hidden(
        name: &'static str,
        get: fn(&R) -> &Option<HiddenField>,
        get_mut: fn(&mut R) -> &mut Option<HiddenField>,
    ) -> Self {
        Self::new(
            name,
            FieldKind::Hidden,
            Box::new(HiddenCodec(Access { get, get_mut })),
        )
    }

    #[must_use]
    pub fn record<N: Record>(
        name: &'static str,
        get: fn(&R) -> &Option<N>,
        get_mut: fn(&mut R) -> &mut Option<N>,
    ) -> Self {
        Self::new(
            name,
            FieldKind::Record(N::NAME),
            Box::new(NestedField(Access { get, get_mut })),
        )
    }

    #[must_use]
    pub fn variant<V: Variant>(
        name: &'static str,
        get: fn(&R) -> &Option<V>,
        get_mut: fn(&mut R) -> &mut Option<V>,
    ) -> Self {
        Self::new(
            name,
            FieldKind::Variant,
            Box::new(VariantField(Access { get, get_mut })),
        )
    }

    #[must_use]
    pub fn variants<V: Variant>(
        name: &'static str,
        get: fn(&R) -> &Vec<V>,
        get_mut: fn(&mut R) -> &mut Vec<V>,
    ) -> Self {
        Self::new(
            name,
            FieldKind::Variants,
            Box::new(SequenceField(Access { get, get_mut })),
        )
    }

    #[must_use]
    pub fn groups<G: GroupKey, V: Variant>(
        name: &'static str,
        get: fn(&R) -> &BTreeMap<G, Vec<V>>,
        get_mut: fn(&mut R) -> &mut BTreeMap<G, Vec<V>>,
    ) -> Self {
        Self::new(
            name,
            FieldKind::Groups,
            Box::new(GroupsField(Access { get, get_mut })),
        )
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }
}

//
// Field codecs
//

trait FieldCodec<R> {
    fn expand(&self, value: Option<&Value>, scope: &Scope, record: &mut R) -> MapResult<()>;

    fn flatten(&self, record: &R) -> Value;

    fn read(&self, record: &R, _prior: Option<&Value>) -> Value {
        self.flatten(record)
    }
}

struct Access<R, T> {
    get: fn(&R) -> &T,
    get_mut: fn(&mut R) -> &mut T,
}

struct ScalarField<R, T>(Access<R, Option<T>>);

impl<R, T: Scalar> FieldCodec<R> for ScalarField<R, T> {
    fn expand(&self, value: Option<&Value>, scope: &Scope, record: &mut R) -> MapResult<()> {
        *(self.0.get_mut)(record) = ScalarMapper::expand(value, scope)?;
        Ok(())
    }

    fn flatten(&self, record: &R) -> Value {
        ScalarMapper::flatten((self.0.get)(record).as_ref())
    }
}

struct ListField<R, T>(Access<R, Vec<T>>);

impl<R, T: Scalar> FieldCodec<R> for ListField<R, T> {
    fn expand(&self, value: Option<&Value>, scope: &Scope, record: &mut R) -> MapResult<()> {
        *(self.0.get_mut)(record) = ScalarMapper::expand_list(value, scope)?;
        Ok(())
    }

    fn flatten(&self, record: &R) -> Value {
        ScalarMapper::flatten_list((self.0.get)(record))
    }
}

struct HiddenCodec<R>(Access<R, Option<HiddenField>>);

impl<R> FieldCodec<R> for HiddenCodec<R> {
    fn expand(&self, value: Option<&Value>, _scope: &Scope, record: &mut R) -> MapResult<()> {
        *(self.0.get_mut)(record) = HiddenFieldMapper::expand(value);
        Ok(())
    }

    fn flatten(&self, record: &R) -> Value {
        HiddenFieldMapper::flatten((self.0.get)(record).as_ref())
    }

    fn read(&self, record: &R, prior: Option<&Value>) -> Value {
        HiddenFieldMapper::read((self.0.get)(record).as_ref(), prior)
    }
}

struct NestedField<R, N>(Access<R, Option<N>>);

impl<R, N: Record> FieldCodec<R> for NestedField<R, N> {
    fn expand(&self, value: Option<&Value>, scope: &Scope, record: &mut R) -> MapResult<()> {
        *(self.0.get_mut)(record) = RecordMapper::expand_one(value, scope)?;
        Ok(())
    }

    fn flatten(&self, record: &R) -> Value {
        RecordMapper::flatten_one((self.0.get)(record).as_ref())
    }

    fn read(&self, record: &R, prior: Option<&Value>) -> Value {
        RecordMapper::read_one((self.0.get)(record).as_ref(), prior)
    }
}

struct VariantField<R, V>(Access<R, Option<V>>);

impl<R, V: Variant> FieldCodec<R> for VariantField<R, V> {
    fn expand(&self, value: Option<&Value>, scope: &Scope, record: &mut R) -> MapResult<()> {
        *(self.0.get_mut)(record) = VariantMapper::expand_one(value, scope)?;
        Ok(())
    }

    fn flatten(&self, record: &R) -> Value {
        VariantMapper::flatten_one((self.0.get)(record).as_ref())
    }
}

struct SequenceField<R, V>(Access<R, Vec<V>>);

impl<R, V: Variant> FieldCodec<R> for SequenceField<R, V> {
    fn expand(&self, value: Option<&Value>, scope: &Scope, record: &mut R) -> MapResult<()> {
        *(self.0.get_mut)(record) = VariantMapper::expand_sequence(value, scope)?;
        Ok(())
    }

    fn flatten(&self, record: &R) -> Value {
        VariantMapper::flatten_sequence((self.0.get)(record))
    }
}

struct GroupsField<R, G, V>(Access<R, BTreeMap<G, Vec<V>>>);

impl<R, G: GroupKey, V: Variant> FieldCodec<R> for GroupsField<R, G, V> {
    fn expand(&self, value: Option<&Value>, scope: &Scope, record: &mut R) -> MapResult<()> {
        *(self.0.get_mut)(record) = GroupMapper::expand_groups(value, scope)?;
        Ok(())
    }

    fn flatten(&self, record: &R) -> Value {
        GroupMapper::flatten_groups((self.0.get)(record))
    }
}

///
/// RecordMapper
///

pub struct RecordMapper;

impl RecordMapper {
    pub fn expand_fields<R: Record>(map: &TreeMap, scope: &Scope) -> MapResult<R> {
        Self::expand_fields_except(map, scope, &[])
    }

    /// Expand while treating `reserved` members as claimed, e.g. the
    /// discriminator of a variant whose payload is a record.
    pub fn expand_fields_except<R: Record>(
        map: &TreeMap,
        scope: &Scope,
        reserved: &[&str],
    ) -> MapResult<R> {
        let fields = R::fields();
        check_unknown_keys(
            map,
            |key| reserved.contains(&key) || fields.iter().any(|f| f.name == key),
            scope,
        )?;

        let mut record = R::default();
        for field in &fields {
            let value = map.get(field.name);
            let field_scope = scope.field(field.name);

            if R::REQUIRED.contains(&field.name) && tree::is_unset(value) {
                return Err(MappingError::shape(
                    field_scope.path(),
                    format!("{} requires '{}'", R::NAME, field.name),
                ));
            }

            field.codec.expand(value, &field_scope, &mut record)?;
        }

        Ok(record)
    }

    /// Every declared key is emitted; absent members flatten to `null` or `[]`.
    #[must_use]
    pub fn flatten_fields<R: Record>(record: &R) -> TreeMap {
        R::fields()
            .iter()
            .map(|field| (field.name.to_string(), field.codec.flatten(record)))
            .collect()
    }

    /// Flatten for the read path; hidden members merge with `prior`.
    #[must_use]
    pub fn read_fields<R: Record>(record: &R, prior: Option<&TreeMap>) -> TreeMap {
        R::fields()
            .iter()
            .map(|field| {
                let prior_value = prior.and_then(|p| p.get(field.name));
                (field.name.to_string(), field.codec.read(record, prior_value))
            })
            .collect()
    }

    /// Expand an optional nested record from the list-of-one encoding.
    pub fn expand_one<R: Record>(value: Option<&Value>, scope: &Scope) -> MapResult<Option<R>> {
        tree::require_object(value, scope)?
            .map(|map| Self::expand_fields(map, &scope.index(0)))
            .transpose()
    }

    #[must_use]
    pub fn flatten_one<R: Record>(record: Option<&R>) -> Value {
        record.map_or_else(tree::empty_list, |r| {
            tree::wrap_one(Self::flatten_fields(r))
        })
    }

    #[must_use]
    pub fn read_one<R: Record>(record: Option<&R>, prior: Option<&Value>) -> Value {
        let prior_map = match tree::list_of_one(prior) {
            tree::ListOfOne::Present(map) => Some(map),
            _ => None,
        };

        record.map_or_else(tree::empty_list, |r| {
            tree::wrap_one(Self::read_fields(r, prior_map))
        })
    }

    /// Declared member names in flatten order.
    #[must_use]
    pub fn field_names<R: Record>() -> Vec<&'static str> {
        R::fields().iter().map(Field::name).collect()
    }
}

///
/// TESTS
///
