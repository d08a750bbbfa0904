use crate::schema::Schema;
use crate::types::{Accumulator, Path, PathSegment, ValidationError, Value};
use crate::validation::{ParseResult, Validation};

/// Caller-level settings for one parse.
///
/// # Examples
///
/// ```
/// use schema_rail::{ParseOptions, Schema, Value};
///
/// let options = ParseOptions::new().coerce(true);
/// let parsed = Schema::integer().parse_with(&"42".into(), &options);
/// assert_eq!(parsed.into_value(), Some(Value::Int(42)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOptions {
    /// Enables coercion on every node, on top of per-node settings.
    pub coerce: bool,
    /// Opaque value handed to every transform and refinement.
    pub context: Option<Value>,
}

impl ParseOptions {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn coerce(mut self, coerce: bool) -> Self {
        self.coerce = coerce;
        self
    }

    #[inline]
    #[must_use]
    pub fn context(mut self, context: impl Into<Value>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// State of one traversal call: a schema node applied to one input value.
///
/// A fresh context is created at the root and at every field or item
/// boundary. Errors held by a context are relative to its own node; the
/// parent prefixes them with exactly one segment when it absorbs the child.
///
/// The root context is what form adapters consume: the raw input, the
/// best-effort output and every error, each addressable by path.
///
/// # Examples
///
/// ```
/// use schema_rail::{fields, map, ParseOptions, Path, Schema, Value};
///
/// let form = Schema::record(fields! {
///     "name" => Schema::string(),
///     "age" => Schema::integer(),
/// });
/// let input = map! { "name" => "ada", "age" => "old" };
/// let options = ParseOptions::default();
/// let cx = form.run(&input, &options);
///
/// assert!(!cx.is_valid());
/// assert_eq!(cx.output().and_then(|v| v.get("name")), Some(&Value::from("ada")));
/// assert_eq!(cx.errors_at(&Path::root().join("age")).count(), 1);
/// ```
#[derive(Debug)]
pub struct ParseContext<'a> {
    pub(super) schema: &'a Schema,
    pub(super) input: &'a Value,
    pub(super) output: Option<Value>,
    pub(super) path: Path,
    pub(super) errors: Accumulator<ValidationError>,
    pub(super) options: &'a ParseOptions,
    /// Coercion switched on for this whole subtree by an ancestor.
    pub(super) coerce_subtree: bool,
    /// Set when a wrapper substituted a value without parsing it.
    pub(super) bypass: bool,
}

impl<'a> ParseContext<'a> {
    pub(crate) fn root(schema: &'a Schema, input: &'a Value, options: &'a ParseOptions) -> Self {
        Self::at(schema, input, options, Path::root())
    }

    fn at(schema: &'a Schema, input: &'a Value, options: &'a ParseOptions, path: Path) -> Self {
        Self {
            schema,
            input,
            output: None,
            path,
            errors: Accumulator::new(),
            options,
            coerce_subtree: false,
            bypass: false,
        }
    }

    /// Child context for a field or item one level below this node.
    pub(crate) fn descend<'b>(
        &self,
        schema: &'b Schema,
        input: &'b Value,
        segment: &PathSegment,
    ) -> ParseContext<'b>
    where
        'a: 'b,
    {
        let mut child = ParseContext::at(schema, input, self.options, self.path.join(segment.clone()));
        child.coerce_subtree = self.coerce_subtree;
        child
    }

    /// Child context for another schema applied to this same input.
    pub(crate) fn nested<'b>(&self, schema: &'b Schema) -> ParseContext<'b>
    where
        'a: 'b,
    {
        let mut child = ParseContext::at(schema, self.input, self.options, self.path.clone());
        child.coerce_subtree = self.coerce_subtree;
        child
    }

    /// Enables coercion for this context and everything below it.
    #[inline]
    pub(crate) fn coercing(mut self) -> Self {
        self.coerce_subtree = true;
        self
    }

    /// Merges a finished child, prefixing its errors with `segment` when given.
    ///
    /// Returns the child's value when it is valid, its partial value otherwise.
    pub(crate) fn absorb(
        &mut self,
        segment: Option<&PathSegment>,
        child: ParseContext<'_>,
    ) -> Result<Value, Option<Value>> {
        let ParseContext { output, errors, .. } = child;
        if errors.is_empty() {
            return Ok(output.unwrap_or_default());
        }
        match segment {
            Some(segment) => self.errors.absorb(segment, errors),
            None => self.errors.extend(errors),
        }
        Err(output)
    }

    #[inline]
    pub(crate) fn fail(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Whether coercion applies at this node.
    #[inline]
    pub(crate) fn coerces(&self) -> bool {
        self.options.coerce || self.coerce_subtree || self.schema.metadata().coerce()
    }

    #[inline]
    #[must_use]
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    #[inline]
    #[must_use]
    pub fn input(&self) -> &'a Value {
        self.input
    }

    /// Parsed value when valid, best-effort reconstruction otherwise.
    #[inline]
    #[must_use]
    pub fn output(&self) -> Option<&Value> {
        self.output.as_ref()
    }

    /// Absolute location of this node.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        self.errors.as_slice()
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors located exactly at `path`, relative to this node.
    pub fn errors_at<'p>(&'p self, path: &'p Path) -> impl Iterator<Item = &'p ValidationError> + 'p {
        self.errors.at(path)
    }

    /// Rendered messages for one field, ready to show next to a form input.
    #[must_use]
    pub fn messages_at<'p>(&'p self, path: &'p Path) -> Vec<&'p str> {
        self.errors_at(path).map(ValidationError::message).collect()
    }

    pub fn into_result(self) -> ParseResult {
        if self.errors.is_empty() {
            Validation::Valid(self.output.unwrap_or_default())
        } else {
            Validation::Invalid { errors: self.errors.into_inner(), partial: self.output }
        }
    }
}
