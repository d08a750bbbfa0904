//! Typed option structs for the variant-specific constructor settings.
//!
//! Each struct has documented defaults via [`Default`] and is validated once,
//! when the schema is built.
use crate::schema::scalar::Pattern;
use crate::schema::Schema;
use crate::types::{SchemaError, SchemaResult, Value};

/// Length and pattern constraints for string scalars. All unset by default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringOptions {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
}

impl StringOptions {
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use]
    pub fn length(self, len: usize) -> Self {
        self.min_length(len).max_length(len)
    }

    /// Compiles `source` as a regular expression constraint.
    pub fn try_pattern(mut self, source: &str) -> SchemaResult<Self> {
        self.pattern = Some(Pattern::new(source)?);
        Ok(self)
    }

    /// # Panics
    ///
    /// Panics if `source` is not a valid regular expression.
    #[track_caller]
    #[must_use]
    pub fn pattern(self, source: &str) -> Self {
        crate::types::schema_error::abort_on_error(self.try_pattern(source))
    }

    pub(crate) fn validate(&self) -> SchemaResult<()> {
        check_bounds(self.min_length.map(|n| n as f64), self.max_length.map(|n| n as f64))
    }
}

/// Inclusive numeric bounds for integer, float and number scalars.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumberOptions {
    #[must_use]
    pub fn min(mut self, min: impl Into<f64>) -> Self {
        self.min = Some(min.into());
        self
    }

    #[must_use]
    pub fn max(mut self, max: impl Into<f64>) -> Self {
        self.max = Some(max.into());
        self
    }

    #[must_use]
    pub fn between(self, min: impl Into<f64>, max: impl Into<f64>) -> Self {
        self.min(min).max(max)
    }

    pub(crate) fn validate(&self) -> SchemaResult<()> {
        check_bounds(self.min, self.max)
    }
}

/// Element-count bounds for sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceOptions {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl SequenceOptions {
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub(crate) fn validate(&self) -> SchemaResult<()> {
        check_bounds(self.min_length.map(|n| n as f64), self.max_length.map(|n| n as f64))
    }
}

/// What a record does with input keys it does not declare.
#[derive(Debug, Clone, Default)]
pub enum UnknownKeys {
    /// Drop them from the output.
    #[default]
    Strip,
    /// Report each one as `unrecognized_key`.
    Error,
    /// Copy them to the output verbatim.
    Preserve,
    /// Validate them as a nested map with these key and value schemas.
    PreserveWith { key: Schema, value: Schema },
}

/// Record settings. Defaults: strip unknown keys, no extra empty sentinels.
#[derive(Debug, Clone, Default)]
pub struct RecordOptions {
    pub unknown_keys: UnknownKeys,
    /// Values treated exactly like a missing key (besides `Null`).
    pub empty_values: Vec<Value>,
}

impl RecordOptions {
    #[must_use]
    pub fn strict() -> Self {
        Self { unknown_keys: UnknownKeys::Error, ..Default::default() }
    }

    #[must_use]
    pub fn preserve() -> Self {
        Self { unknown_keys: UnknownKeys::Preserve, ..Default::default() }
    }

    #[must_use]
    pub fn preserve_with(key: Schema, value: Schema) -> Self {
        Self { unknown_keys: UnknownKeys::PreserveWith { key, value }, ..Default::default() }
    }

    #[must_use]
    pub fn unknown_keys(mut self, policy: UnknownKeys) -> Self {
        self.unknown_keys = policy;
        self
    }

    /// Adds sentinels (such as `""` from a blank form input) treated as absent.
    #[must_use]
    pub fn empty_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.empty_values.extend(values.into_iter().map(Into::into));
        self
    }
}

fn check_bounds(min: Option<f64>, max: Option<f64>) -> SchemaResult<()> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(SchemaError::InvalidBounds { min, max }),
        _ => Ok(()),
    }
}
