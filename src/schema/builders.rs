//! Constructors, wrappers and copy-on-write metadata builders for [`Schema`].
//!
//! Fallible constructors come in pairs: `try_*` returns a [`SchemaError`];
//! the plain form panics with it, since a broken schema is a programmer error.
use std::borrow::Cow;

use crate::engine;
use crate::pipeline::{Check, Refinement, Transform};
use crate::schema::options::{NumberOptions, RecordOptions, SequenceOptions, StringOptions};
use crate::schema::scalar::{Scalar, ScalarKind};
use crate::schema::{
    DiscriminatedSchema, EnumEntry, Field, Kind, MapSchema, Metadata, RecordSchema, RecordShape,
    Resolver, Schema, SequenceSchema, Wrapper,
};
use crate::traits::IntoFailure;
use crate::types::schema_error::abort_on_error;
use crate::types::{SchemaError, SchemaResult, ValidationErrors, Value};
use crate::ParseOptions;

/// Leaves.
impl Schema {
    #[must_use]
    pub fn any() -> Self {
        Self::from_kind(Kind::Any)
    }

    #[must_use]
    pub fn string() -> Self {
        Self::from_kind(Kind::Scalar(Scalar::new(ScalarKind::String)))
    }

    pub fn try_string_with(options: StringOptions) -> SchemaResult<Self> {
        Ok(Self::from_kind(Kind::Scalar(Scalar::text(options)?)))
    }

    /// # Panics
    ///
    /// Panics if `min_length` exceeds `max_length`.
    #[track_caller]
    #[must_use]
    pub fn string_with(options: StringOptions) -> Self {
        abort_on_error(Self::try_string_with(options))
    }

    #[must_use]
    pub fn integer() -> Self {
        Self::from_kind(Kind::Scalar(Scalar::new(ScalarKind::Integer)))
    }

    #[must_use]
    pub fn float() -> Self {
        Self::from_kind(Kind::Scalar(Scalar::new(ScalarKind::Float)))
    }

    #[must_use]
    pub fn number() -> Self {
        Self::from_kind(Kind::Scalar(Scalar::new(ScalarKind::Number)))
    }

    #[must_use]
    pub fn boolean() -> Self {
        Self::from_kind(Kind::Scalar(Scalar::new(ScalarKind::Boolean)))
    }

    pub fn try_integer_with(options: NumberOptions) -> SchemaResult<Self> {
        Ok(Self::from_kind(Kind::Scalar(Scalar::numeric(ScalarKind::Integer, options)?)))
    }

    #[track_caller]
    #[must_use]
    pub fn integer_with(options: NumberOptions) -> Self {
        abort_on_error(Self::try_integer_with(options))
    }

    pub fn try_float_with(options: NumberOptions) -> SchemaResult<Self> {
        Ok(Self::from_kind(Kind::Scalar(Scalar::numeric(ScalarKind::Float, options)?)))
    }

    #[track_caller]
    #[must_use]
    pub fn float_with(options: NumberOptions) -> Self {
        abort_on_error(Self::try_float_with(options))
    }

    pub fn try_number_with(options: NumberOptions) -> SchemaResult<Self> {
        Ok(Self::from_kind(Kind::Scalar(Scalar::numeric(ScalarKind::Number, options)?)))
    }

    #[track_caller]
    #[must_use]
    pub fn number_with(options: NumberOptions) -> Self {
        abort_on_error(Self::try_number_with(options))
    }

    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::from_kind(Kind::Literal(value.into()))
    }

    #[must_use]
    pub fn null() -> Self {
        Self::literal(Value::Null)
    }

    /// Enumeration whose labels are the values' own textual forms.
    pub fn try_enumeration<I, V>(values: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::try_enumeration_pairs(values.into_iter().map(|v| {
            let value = v.into();
            let label = value.key_text().map_or_else(|| value.to_string(), Cow::into_owned);
            (label, value)
        }))
    }

    #[track_caller]
    #[must_use]
    pub fn enumeration<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        abort_on_error(Self::try_enumeration(values))
    }

    /// Ordered `label -> value` table. The output is always the value; with
    /// coercion, the label selects its value too.
    pub fn try_enumeration_pairs<I, L, V>(entries: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
        V: Into<Value>,
    {
        let entries: Vec<EnumEntry> = entries
            .into_iter()
            .map(|(label, value)| EnumEntry { label: label.into(), value: value.into() })
            .collect();
        if entries.is_empty() {
            return Err(SchemaError::Empty("enumeration"));
        }
        Ok(Self::from_kind(Kind::Enumeration(entries)))
    }

    #[track_caller]
    #[must_use]
    pub fn enumeration_pairs<I, L, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
        V: Into<Value>,
    {
        abort_on_error(Self::try_enumeration_pairs(entries))
    }
}

/// Composites.
impl Schema {
    #[must_use]
    pub fn sequence(inner: Schema) -> Self {
        Self::from_kind(Kind::Sequence(SequenceSchema { inner, options: SequenceOptions::default() }))
    }

    pub fn try_sequence_with(inner: Schema, options: SequenceOptions) -> SchemaResult<Self> {
        options.validate()?;
        Ok(Self::from_kind(Kind::Sequence(SequenceSchema { inner, options })))
    }

    #[track_caller]
    #[must_use]
    pub fn sequence_with(inner: Schema, options: SequenceOptions) -> Self {
        abort_on_error(Self::try_sequence_with(inner, options))
    }

    #[must_use]
    pub fn tuple(items: impl IntoIterator<Item = Schema>) -> Self {
        Self::from_kind(Kind::Tuple(items.into_iter().collect()))
    }

    /// Named-field record with associative output.
    pub fn try_record_with<I, K>(fields: I, options: RecordOptions) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<Value>,
    {
        build_record(fields, RecordShape::Map, options)
    }

    /// # Panics
    ///
    /// Panics if a key is declared twice.
    #[track_caller]
    #[must_use]
    pub fn record<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<Value>,
    {
        Self::record_with(fields, RecordOptions::default())
    }

    #[track_caller]
    #[must_use]
    pub fn record_with<I, K>(fields: I, options: RecordOptions) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<Value>,
    {
        abort_on_error(Self::try_record_with(fields, options))
    }

    /// Ordered-pair record: accepts a map or a list of two-element pairs and
    /// outputs a list of `(key, value)` tuples.
    pub fn try_pairs_with<I, K>(fields: I, options: RecordOptions) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<Value>,
    {
        build_record(fields, RecordShape::Pairs, options)
    }

    #[track_caller]
    #[must_use]
    pub fn pairs<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<Value>,
    {
        Self::pairs_with(fields, RecordOptions::default())
    }

    #[track_caller]
    #[must_use]
    pub fn pairs_with<I, K>(fields: I, options: RecordOptions) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<Value>,
    {
        abort_on_error(Self::try_pairs_with(fields, options))
    }

    /// Homogeneous map: every key against `key`, every value against `value`.
    #[must_use]
    pub fn map(key: Schema, value: Schema) -> Self {
        Self::from_kind(Kind::Map(MapSchema { key, value }))
    }

    pub fn try_alternation(children: impl IntoIterator<Item = Schema>) -> SchemaResult<Self> {
        let children: Vec<Schema> = children.into_iter().collect();
        if children.is_empty() {
            return Err(SchemaError::Empty("alternation"));
        }
        Ok(Self::from_kind(Kind::Alternation(children)))
    }

    #[track_caller]
    #[must_use]
    pub fn alternation(children: impl IntoIterator<Item = Schema>) -> Self {
        abort_on_error(Self::try_alternation(children))
    }

    /// Alias for [`Schema::alternation`].
    #[track_caller]
    #[must_use]
    pub fn one_of(children: impl IntoIterator<Item = Schema>) -> Self {
        Self::alternation(children)
    }

    pub fn try_conjunction(children: impl IntoIterator<Item = Schema>) -> SchemaResult<Self> {
        let children: Vec<Schema> = children.into_iter().collect();
        if children.is_empty() {
            return Err(SchemaError::Empty("conjunction"));
        }
        Ok(Self::from_kind(Kind::Conjunction(children)))
    }

    #[track_caller]
    #[must_use]
    pub fn conjunction(children: impl IntoIterator<Item = Schema>) -> Self {
        abort_on_error(Self::try_conjunction(children))
    }

    /// Alias for [`Schema::conjunction`].
    #[track_caller]
    #[must_use]
    pub fn all_of(children: impl IntoIterator<Item = Schema>) -> Self {
        Self::conjunction(children)
    }

    /// Builds the `literal -> branch` table for tagged dispatch.
    ///
    /// Every branch must be a record with a literal field at `key`, and no two
    /// branches may share a literal, compared by normalized text so `1` and
    /// `"1"` collide.
    pub fn try_discriminated(
        key: impl Into<Value>,
        branches: impl IntoIterator<Item = Schema>,
    ) -> SchemaResult<Self> {
        let key = key.into();
        let mut table: Vec<(Value, Schema)> = Vec::new();
        for (index, branch) in branches.into_iter().enumerate() {
            let Kind::Record(record) = branch.kind() else {
                return Err(SchemaError::NotARecord { branch: index });
            };
            let literal = record
                .field(&key, false)
                .and_then(|field| literal_of(field.schema()))
                .ok_or_else(|| SchemaError::MissingDiscriminator { key: key.clone(), branch: index })?;
            if table.iter().any(|(existing, _)| existing.key_matches(&literal, true)) {
                return Err(SchemaError::DuplicateDiscriminator { value: literal });
            }
            table.push((literal, branch));
        }
        if table.is_empty() {
            return Err(SchemaError::Empty("discriminated"));
        }
        Ok(Self::from_kind(Kind::Discriminated(DiscriminatedSchema { key, branches: table })))
    }

    #[track_caller]
    #[must_use]
    pub fn discriminated(key: impl Into<Value>, branches: impl IntoIterator<Item = Schema>) -> Self {
        abort_on_error(Self::try_discriminated(key, branches))
    }

    /// Deferred schema, resolved again on every parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_rail::{fields, map, Schema, Value};
    ///
    /// fn tree() -> Schema {
    ///     Schema::record(fields! {
    ///         "value" => Schema::integer(),
    ///         "children" => Schema::sequence(Schema::lazy(tree)).optional(),
    ///     })
    /// }
    ///
    /// let input = map! {
    ///     "value" => 1,
    ///     "children" => vec![map! { "value" => 2 }],
    /// };
    /// assert!(tree().parse(&input).is_valid());
    /// ```
    #[must_use]
    pub fn lazy<F>(resolve: F) -> Self
    where
        F: Fn() -> Schema + Send + Sync + 'static,
    {
        Self::from_kind(Kind::Wrapper(Wrapper::Lazy(Resolver::new(resolve))))
    }
}

/// Wrappers.
impl Schema {
    /// Absence is not an error inside records; a present value must still parse.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::from_kind(Kind::Wrapper(Wrapper::Optional(self)))
    }

    /// Accepts `Null` in addition to the inner schema.
    #[must_use]
    pub fn nullable(self) -> Self {
        Self::from_kind(Kind::Wrapper(Wrapper::Nullable(self)))
    }

    /// Forces presence, whatever the inner schema says.
    #[must_use]
    pub fn required(self) -> Self {
        let meta = Metadata { required: Some(true), ..Metadata::default() };
        Self::from_node(Kind::Wrapper(Wrapper::Required(self)), meta)
    }

    /// Substitutes `value` when the input is missing. The value is checked
    /// against this schema now, once.
    pub fn try_default(self, value: impl Into<Value>) -> SchemaResult<Self> {
        let value = value.into();
        if let Err(errors) = engine::parse(&self, &value, &ParseOptions::default()).to_result() {
            return Err(SchemaError::InvalidDefault {
                value,
                errors: ValidationErrors::new(errors, None),
            });
        }
        Ok(Self::from_kind(Kind::Wrapper(Wrapper::Default(self, value))))
    }

    /// # Panics
    ///
    /// Panics if `value` does not satisfy this schema.
    #[track_caller]
    #[must_use]
    pub fn default(self, value: impl Into<Value>) -> Self {
        abort_on_error(self.try_default(value))
    }

    /// Rebuilds a presence wrapper around a new inner schema, keeping its metadata.
    fn rewrap(&self, edit: impl FnOnce(&Schema) -> Schema) -> Option<Self> {
        let wrapper = match self.kind() {
            Kind::Wrapper(Wrapper::Optional(inner)) => Wrapper::Optional(edit(inner)),
            Kind::Wrapper(Wrapper::Default(inner, value)) => Wrapper::Default(edit(inner), value.clone()),
            Kind::Wrapper(Wrapper::Nullable(inner)) => Wrapper::Nullable(edit(inner)),
            Kind::Wrapper(Wrapper::Required(inner)) => Wrapper::Required(edit(inner)),
            _ => return None,
        };
        Some(Self::from_node(Kind::Wrapper(wrapper), self.metadata().clone()))
    }
}

/// Copy-on-write metadata.
impl Schema {
    /// Enables coercion on this node, and through presence wrappers on the
    /// node they wrap.
    #[must_use]
    pub fn coerce(self) -> Self {
        let base = self.rewrap(|inner| inner.clone().coerce()).unwrap_or(self);
        base.with_meta(|m| m.coerce = true)
    }

    /// Overrides the message of structural errors raised by this node.
    #[must_use]
    pub fn error(self, message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        self.with_meta(|m| m.custom_error = Some(message))
    }

    #[must_use]
    pub fn describe(self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.with_meta(|m| m.description = Some(description))
    }

    /// Attaches an opaque annotation for external tooling.
    #[must_use]
    pub fn annotate(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let (key, value) = (key.into(), value.into());
        self.with_meta(|m| {
            m.annotations.insert(key, value);
        })
    }

    /// Sets the metadata required flag explicitly.
    #[must_use]
    pub fn with_required(self, required: bool) -> Self {
        self.with_meta(|m| m.required = Some(required))
    }

    #[must_use]
    pub fn refine<F, R>(self, check: F) -> Self
    where
        F: Fn(&Value, &Check<'_>) -> Result<(), R> + Send + Sync + 'static,
        R: IntoFailure,
    {
        self.refine_named("refine", Vec::new(), check)
    }

    #[must_use]
    pub fn refine_named<F, R>(
        self,
        name: impl Into<Cow<'static, str>>,
        args: Vec<Value>,
        check: F,
    ) -> Self
    where
        F: Fn(&Value, &Check<'_>) -> Result<(), R> + Send + Sync + 'static,
        R: IntoFailure,
    {
        let refinement = Refinement::new(name, args, check);
        self.with_meta(|m| m.refinements.push(refinement))
    }

    /// Predicate refinement failing with a fixed message.
    #[must_use]
    pub fn check<P>(self, message: impl Into<Cow<'static, str>>, predicate: P) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.refine_named("check", Vec::new(), move |value, _| {
            if predicate(value) {
                Ok(())
            } else {
                Err(message.clone())
            }
        })
    }

    #[must_use]
    pub fn transform<F, T, R>(self, apply: F) -> Self
    where
        F: Fn(&Value, &Check<'_>) -> Result<T, R> + Send + Sync + 'static,
        T: Into<Value>,
        R: IntoFailure,
    {
        self.transform_named("transform", Vec::new(), apply)
    }

    #[must_use]
    pub fn transform_named<F, T, R>(
        self,
        name: impl Into<Cow<'static, str>>,
        args: Vec<Value>,
        apply: F,
    ) -> Self
    where
        F: Fn(&Value, &Check<'_>) -> Result<T, R> + Send + Sync + 'static,
        T: Into<Value>,
        R: IntoFailure,
    {
        let transform = Transform::new(name, args, apply);
        self.with_meta(|m| m.transforms.push(transform))
    }
}

fn build_record<I, K>(fields: I, shape: RecordShape, options: RecordOptions) -> SchemaResult<Schema>
where
    I: IntoIterator<Item = (K, Schema)>,
    K: Into<Value>,
{
    let mut declared: Vec<Field> = Vec::new();
    for (key, schema) in fields {
        let key = key.into();
        if declared.iter().any(|f| f.key == key) {
            return Err(SchemaError::DuplicateField { key });
        }
        declared.push(Field { key, schema });
    }
    Ok(Schema::from_kind(Kind::Record(RecordSchema { fields: declared, shape, options })))
}

/// Literal value of a discriminator field, looking through `required`.
fn literal_of(schema: &Schema) -> Option<Value> {
    match schema.kind() {
        Kind::Literal(value) => Some(value.clone()),
        Kind::Wrapper(Wrapper::Required(inner)) => literal_of(inner),
        _ => None,
    }
}
