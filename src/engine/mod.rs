//! The traversal engine.
//!
//! [`parse`] dispatches on the schema variant, lets the variant produce a
//! structural result, applies the node's custom error override and, on
//! success, runs the node's [`Pipeline`]. Composites recurse through child
//! [`ParseContext`]s and fold their errors back in, prefixing one path
//! segment per level crossed.
//!
//! Nothing here fails fast: every error in the input tree is reported in one
//! pass, together with a best-effort output.
//!
//! # Examples
//!
//! ```
//! use schema_rail::{engine, fields, map, ParseOptions, Schema, Value};
//!
//! let point = Schema::record(fields! { "x" => Schema::float(), "y" => Schema::float() });
//! let input = map! { "x" => "1.5", "y" => 2 };
//!
//! let parsed = engine::parse(&point, &input, &ParseOptions::new().coerce(true));
//! assert_eq!(parsed.into_value(), Some(map! { "x" => 1.5, "y" => 2.0 }));
//! ```
mod composite;
mod context;
mod leaf;
mod resolver;
mod wrapper;

pub use context::{ParseContext, ParseOptions};

use crate::pipeline::Pipeline;
use crate::schema::{Kind, Schema};
use crate::types::{Accumulator, ErrorCode, ValidationErrors, Value};
use crate::validation::{ParseResult, Validation};

/// Parses `input` against `schema`, accumulating every error.
pub fn parse(schema: &Schema, input: &Value, options: &ParseOptions) -> ParseResult {
    let cx = ParseContext::root(schema, input, options).run();
    #[cfg(feature = "tracing")]
    tracing::debug!(
        schema = schema.kind_name(),
        valid = cx.is_valid(),
        errors = cx.errors().len(),
        "parse finished"
    );
    cx.into_result()
}

impl<'a> ParseContext<'a> {
    /// Runs this node to completion and returns the finished context.
    pub(crate) fn run(mut self) -> Self {
        let schema = self.schema;
        #[cfg(feature = "tracing")]
        tracing::trace!(kind = schema.kind_name(), path = %self.path, "parse node");

        let output = match schema.kind() {
            Kind::Any => Some(self.input.clone()),
            Kind::Scalar(scalar) => leaf::scalar(&mut self, scalar),
            Kind::Literal(expected) => leaf::literal(&mut self, expected),
            Kind::Enumeration(entries) => leaf::enumeration(&mut self, entries),
            Kind::Sequence(sequence) => composite::sequence(&mut self, sequence),
            Kind::Tuple(items) => composite::tuple(&mut self, items),
            Kind::Record(record) => resolver::record(&mut self, record),
            Kind::Map(map) => composite::map(&mut self, map),
            Kind::Alternation(children) => composite::alternation(&mut self, children),
            Kind::Conjunction(children) => composite::conjunction(&mut self, children),
            Kind::Discriminated(table) => composite::discriminated(&mut self, table),
            Kind::Wrapper(wrapper) => wrapper::wrapper(&mut self, wrapper),
        };
        self.output = output;

        if let Some(message) = schema.metadata().custom_error() {
            self.override_messages(message);
        }
        if self.errors.is_empty() && !self.bypass {
            self.run_pipeline();
        }
        self
    }

    /// Replaces the message of structural errors raised at this node.
    fn override_messages(&mut self, message: &str) {
        if self.errors.iter().all(|e| !e.path().is_root() || e.code() == ErrorCode::Custom) {
            return;
        }
        self.errors = std::mem::replace(&mut self.errors, Accumulator::new())
            .into_iter()
            .map(|e| {
                if e.path().is_root() && e.code() != ErrorCode::Custom {
                    e.with_message(message)
                } else {
                    e
                }
            })
            .collect();
    }

    fn run_pipeline(&mut self) {
        let pipeline = Pipeline::new(self.schema.metadata());
        if pipeline.is_empty() {
            return;
        }
        let Some(value) = self.output.take() else { return };
        match pipeline.run(value, &self.path, self.input, self.options.context.as_ref()) {
            Validation::Valid(value) => self.output = Some(value),
            Validation::Invalid { errors, partial } => {
                self.errors.extend(errors);
                self.output = partial;
            }
        }
    }
}

/// Parse entrypoints.
impl Schema {
    /// Parses with default options.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_rail::{Schema, Value};
    ///
    /// assert!(Schema::string().parse(&"ok".into()).is_valid());
    /// assert!(Schema::string().parse(&Value::Int(1)).is_invalid());
    /// ```
    pub fn parse(&self, input: &Value) -> ParseResult {
        parse(self, input, &ParseOptions::default())
    }

    pub fn parse_with(&self, input: &Value, options: &ParseOptions) -> ParseResult {
        parse(self, input, options)
    }

    /// `Result`-shaped parse, for use with `?`.
    pub fn validate(&self, input: &Value) -> Result<Value, ValidationErrors> {
        match self.parse(input) {
            Validation::Valid(value) => Ok(value),
            Validation::Invalid { errors, partial } => Err(ValidationErrors::new(errors, partial)),
        }
    }

    /// Parses and returns the value, aborting on invalid input.
    ///
    /// # Panics
    ///
    /// Panics with the full error report when `input` is invalid.
    #[track_caller]
    pub fn parse_strict(&self, input: &Value) -> Value {
        match self.validate(input) {
            Ok(value) => value,
            Err(errors) => panic!("invalid input:\n{errors}"),
        }
    }

    /// Parses and keeps the whole root context: input, best-effort output and errors.
    pub fn run<'a>(&'a self, input: &'a Value, options: &'a ParseOptions) -> ParseContext<'a> {
        let cx = ParseContext::root(self, input, options).run();
        #[cfg(feature = "tracing")]
        tracing::debug!(schema = self.kind_name(), valid = cx.is_valid(), "run finished");
        cx
    }
}
