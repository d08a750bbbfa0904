//! The schema node model.
//!
//! A [`Schema`] is a cheap handle to an immutable [`SchemaNode`]: one
//! [`Kind`] from a closed set of variants plus a [`Metadata`] block. Composite
//! kinds own their children. The only indirection is [`Wrapper::Lazy`], which
//! holds a resolver instead of a child so schemas can refer to themselves.
//!
//! Schemas are never mutated. Builder methods such as [`Schema::coerce`]
//! return a new node, so a schema can be shared freely across threads.
//!
//! # Examples
//!
//! ```
//! use schema_rail::{fields, map, ErrorCode, Schema};
//!
//! let user = Schema::record(fields! {
//!     "name" => Schema::string(),
//!     "age" => Schema::integer().optional(),
//! });
//!
//! let errors = user.parse(&map! { "age" => "x" }).into_errors().unwrap();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].code(), ErrorCode::Required);
//! assert_eq!(errors[1].code(), ErrorCode::TypeMismatch);
//! ```
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

mod builders;
pub mod metadata;
pub mod options;
pub mod scalar;

pub use metadata::Metadata;
pub use options::{NumberOptions, RecordOptions, SequenceOptions, StringOptions, UnknownKeys};
pub use scalar::{Pattern, Scalar, ScalarKind};

use crate::types::Value;

/// Handle to an immutable schema node.
#[derive(Clone)]
pub struct Schema {
    node: Arc<SchemaNode>,
}

/// One validation rule: a variant and its metadata.
#[derive(Debug, Clone)]
pub struct SchemaNode {
    pub(crate) kind: Kind,
    pub(crate) meta: Metadata,
}

/// The closed set of schema variants.
#[derive(Debug, Clone)]
pub enum Kind {
    /// Accepts any value unchanged.
    Any,
    Scalar(Scalar),
    /// Exactly this value.
    Literal(Value),
    Enumeration(Vec<EnumEntry>),
    Sequence(SequenceSchema),
    Tuple(Vec<Schema>),
    Record(RecordSchema),
    Map(MapSchema),
    /// First child that parses wins.
    Alternation(Vec<Schema>),
    /// Every child must parse; the last child's output wins.
    Conjunction(Vec<Schema>),
    Discriminated(DiscriminatedSchema),
    Wrapper(Wrapper),
}

/// Wrappers that change how absence, null and recursion are handled.
#[derive(Debug, Clone)]
pub enum Wrapper {
    Optional(Schema),
    /// The value is checked against the inner schema once, when built.
    Default(Schema, Value),
    Nullable(Schema),
    Required(Schema),
    /// Re-resolved on every parse; tooling must treat it as an opaque leaf.
    Lazy(Resolver),
}

/// Deferred schema reference used by [`Wrapper::Lazy`].
#[derive(Clone)]
pub struct Resolver(Arc<dyn Fn() -> Schema + Send + Sync>);

impl Resolver {
    pub fn new<F>(resolve: F) -> Self
    where
        F: Fn() -> Schema + Send + Sync + 'static,
    {
        Self(Arc::new(resolve))
    }

    #[inline]
    #[must_use]
    pub fn resolve(&self) -> Schema {
        (self.0)()
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Resolver(..)")
    }
}

/// One allowed enumeration value and the label that also selects it under coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumEntry {
    pub label: String,
    pub value: Value,
}

#[derive(Debug, Clone)]
pub struct SequenceSchema {
    pub(crate) inner: Schema,
    pub(crate) options: SequenceOptions,
}

impl SequenceSchema {
    #[inline]
    pub fn inner(&self) -> &Schema {
        &self.inner
    }

    #[inline]
    pub fn options(&self) -> &SequenceOptions {
        &self.options
    }
}

/// Output shape of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    /// Associative output (`Value::Map`).
    Map,
    /// Ordered key/value pairs (`Value::List` of two-element tuples).
    Pairs,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub(crate) key: Value,
    pub(crate) schema: Schema,
}

impl Field {
    #[inline]
    pub fn key(&self) -> &Value {
        &self.key
    }

    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

#[derive(Debug, Clone)]
pub struct RecordSchema {
    pub(crate) fields: Vec<Field>,
    pub(crate) shape: RecordShape,
    pub(crate) options: RecordOptions,
}

impl RecordSchema {
    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[inline]
    pub fn shape(&self) -> RecordShape {
        self.shape
    }

    #[inline]
    pub fn options(&self) -> &RecordOptions {
        &self.options
    }

    /// Declared field whose key matches `key`.
    pub fn field(&self, key: &Value, normalize: bool) -> Option<&Field> {
        self.fields.iter().find(|f| f.key.key_matches(key, normalize))
    }
}

#[derive(Debug, Clone)]
pub struct MapSchema {
    pub(crate) key: Schema,
    pub(crate) value: Schema,
}

impl MapSchema {
    #[inline]
    pub fn key(&self) -> &Schema {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &Schema {
        &self.value
    }
}

/// Tagged dispatch: the discriminator literal selects exactly one record branch.
#[derive(Debug, Clone)]
pub struct DiscriminatedSchema {
    pub(crate) key: Value,
    pub(crate) branches: Vec<(Value, Schema)>,
}

impl DiscriminatedSchema {
    #[inline]
    pub fn key(&self) -> &Value {
        &self.key
    }

    /// `(discriminator literal, branch)` pairs in declaration order.
    #[inline]
    pub fn branches(&self) -> &[(Value, Schema)] {
        &self.branches
    }

    pub fn branch(&self, tag: &Value, normalize: bool) -> Option<&Schema> {
        self.branches.iter().find(|(lit, _)| lit.key_matches(tag, normalize)).map(|(_, s)| s)
    }
}

/// How a record field behaves when its key is absent.
#[derive(Debug, Clone, PartialEq)]
pub enum Presence<'a> {
    Required,
    Optional,
    /// Owned when the default came from a resolved lazy schema.
    Default(Cow<'a, Value>),
}

impl Presence<'_> {
    fn into_owned(self) -> Presence<'static> {
        match self {
            Presence::Required => Presence::Required,
            Presence::Optional => Presence::Optional,
            Presence::Default(value) => Presence::Default(Cow::Owned(value.into_owned())),
        }
    }
}

impl Schema {
    pub(crate) fn from_node(kind: Kind, meta: Metadata) -> Self {
        Self { node: Arc::new(SchemaNode { kind, meta }) }
    }

    pub(crate) fn from_kind(kind: Kind) -> Self {
        Self::from_node(kind, Metadata::default())
    }

    /// Copy-on-write edit of this node's metadata.
    pub(crate) fn with_meta(&self, edit: impl FnOnce(&mut Metadata)) -> Self {
        let mut node = (*self.node).clone();
        edit(&mut node.meta);
        Self { node: Arc::new(node) }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.node.kind
    }

    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.node.meta
    }

    /// Short variant label, as used in traces and reports.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self.kind() {
            Kind::Any => "any",
            Kind::Scalar(s) => s.kind().name(),
            Kind::Literal(_) => "literal",
            Kind::Enumeration(_) => "enumeration",
            Kind::Sequence(_) => "sequence",
            Kind::Tuple(_) => "tuple",
            Kind::Record(_) => "record",
            Kind::Map(_) => "map",
            Kind::Alternation(_) => "alternation",
            Kind::Conjunction(_) => "conjunction",
            Kind::Discriminated(_) => "discriminated",
            Kind::Wrapper(Wrapper::Optional(_)) => "optional",
            Kind::Wrapper(Wrapper::Default(..)) => "default",
            Kind::Wrapper(Wrapper::Nullable(_)) => "nullable",
            Kind::Wrapper(Wrapper::Required(_)) => "required",
            Kind::Wrapper(Wrapper::Lazy(_)) => "lazy",
        }
    }

    /// Presence rule applied by the key-value resolver when this schema's key is missing.
    #[must_use]
    pub fn presence(&self) -> Presence<'_> {
        match self.metadata().required {
            Some(true) => return Presence::Required,
            Some(false) => return Presence::Optional,
            None => {}
        }
        match self.kind() {
            Kind::Wrapper(Wrapper::Optional(_)) => Presence::Optional,
            Kind::Wrapper(Wrapper::Default(_, value)) => Presence::Default(Cow::Borrowed(value)),
            Kind::Wrapper(Wrapper::Nullable(inner)) => inner.presence(),
            Kind::Wrapper(Wrapper::Lazy(resolver)) => resolver.resolve().presence().into_owned(),
            _ => Presence::Required,
        }
    }

    /// Whether an explicit `Null` is a legitimate value for this schema
    /// rather than a stand-in for absence.
    #[must_use]
    pub fn accepts_null(&self) -> bool {
        match self.kind() {
            Kind::Any | Kind::Wrapper(Wrapper::Nullable(_)) => true,
            Kind::Literal(value) => value.is_null(),
            Kind::Enumeration(entries) => entries.iter().any(|e| e.value.is_null()),
            Kind::Alternation(children) => children.iter().any(Schema::accepts_null),
            Kind::Conjunction(children) => children.iter().all(Schema::accepts_null),
            Kind::Wrapper(
                Wrapper::Optional(inner) | Wrapper::Default(inner, _) | Wrapper::Required(inner),
            ) => inner.accepts_null(),
            Kind::Wrapper(Wrapper::Lazy(resolver)) => resolver.resolve().accepts_null(),
            _ => false,
        }
    }

    /// True when both handles point at the same node.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Schema) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.node, f)
    }
}
