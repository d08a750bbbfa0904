//! Validation errors: what went wrong, where, and how to say it.
//!
//! A [`ValidationError`] is an immutable value. Only its [`Path`] grows, one
//! outer segment per nesting level crossed while it travels to the root.
//!
//! # Examples
//!
//! ```
//! use schema_rail::{ErrorCode, ValidationError};
//!
//! let err = ValidationError::too_small(3, 1)
//!     .with_prefix("name".into())
//!     .with_prefix("user".into());
//!
//! assert_eq!(err.code(), ErrorCode::RangeViolation);
//! assert_eq!(err.to_string(), "user.name: must be at least 3 (got 1)");
//! ```
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::error_formatter::{ErrorFormatter, ReportConfig};
use crate::types::path::{Path, PathSegment};
use crate::types::value::Value;
use crate::types::ErrorVec;

/// Stable, machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum ErrorCode {
    /// Wrong scalar or composite kind, including failed coercion.
    TypeMismatch,
    /// Absent required field or value.
    Required,
    /// Strict record saw an undeclared key.
    UnrecognizedKey,
    /// Tuple length differs from the declared arity.
    ArityMismatch,
    /// Numeric or length bound failed.
    RangeViolation,
    /// Value not in the allowed literal/enumeration set.
    EnumMismatch,
    /// Discriminator missing or matching no branch.
    Discriminator,
    /// Reported by a refinement or transform.
    Custom,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::Required => "required",
            Self::UnrecognizedKey => "unrecognized_key",
            Self::ArityMismatch => "arity_mismatch",
            Self::RangeViolation => "range_violation",
            Self::EnumMismatch => "enum_mismatch",
            Self::Discriminator => "discriminator",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message template plus the arguments interpolated into its `{name}` slots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Issue {
    template: Cow<'static, str>,
    args: Vec<(Cow<'static, str>, Value)>,
}

impl Issue {
    #[inline]
    pub fn new(template: impl Into<Cow<'static, str>>) -> Self {
        Self { template: template.into(), args: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn arg(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    #[inline]
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[inline]
    #[must_use]
    pub fn args(&self) -> &[(Cow<'static, str>, Value)] {
        &self.args
    }

    /// Looks up an interpolation argument by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.args.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Interpolates the arguments. `{name}` inserts strings bare and other
    /// values in their display form; `{name:?}` always uses the display form,
    /// so a string argument comes out quoted. Unknown placeholders are left
    /// untouched.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.template.len() + 16);
        let mut rest: &str = &self.template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let placeholder = &after[..close];
                    let (name, quoted) = match placeholder.strip_suffix(":?") {
                        Some(name) => (name, true),
                        None => (placeholder, false),
                    };
                    match self.get(name) {
                        Some(Value::Str(s)) if !quoted => out.push_str(s),
                        Some(other) => out.push_str(&other.to_string()),
                        None => {
                            out.push('{');
                            out.push_str(placeholder);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// A single located validation failure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ValidationError {
    code: ErrorCode,
    issue: Issue,
    message: String,
    path: Path,
}

impl ValidationError {
    /// Creates an error at the current (relative) root with the rendered issue as message.
    pub fn new(code: ErrorCode, issue: Issue) -> Self {
        let message = issue.render();
        Self { code, issue, message, path: Path::root() }
    }

    /// A `custom` error, as returned by refinements and transforms.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorCode::Custom, Issue::new(message))
    }

    pub fn type_mismatch(expected: &'static str, actual: &Value) -> Self {
        Self::new(
            ErrorCode::TypeMismatch,
            Issue::new("expected {expected}, got {actual}")
                .arg("expected", expected)
                .arg("actual", actual.type_name()),
        )
    }

    pub fn required() -> Self {
        Self::new(ErrorCode::Required, Issue::new("is required"))
    }

    pub fn unrecognized_key(key: &Value) -> Self {
        Self::new(ErrorCode::UnrecognizedKey, Issue::new("unrecognized key {key:?}").arg("key", key.clone()))
    }

    pub fn arity_mismatch(expected: usize, actual: usize) -> Self {
        Self::new(
            ErrorCode::ArityMismatch,
            Issue::new("expected {expected} elements, got {actual}")
                .arg("expected", expected as i64)
                .arg("actual", actual as i64),
        )
    }

    pub fn too_small(min: impl Into<Value>, actual: impl Into<Value>) -> Self {
        Self::new(
            ErrorCode::RangeViolation,
            Issue::new("must be at least {min} (got {actual})").arg("min", min).arg("actual", actual),
        )
    }

    pub fn too_big(max: impl Into<Value>, actual: impl Into<Value>) -> Self {
        Self::new(
            ErrorCode::RangeViolation,
            Issue::new("must be at most {max} (got {actual})").arg("max", max).arg("actual", actual),
        )
    }

    pub fn pattern_mismatch(pattern: &str) -> Self {
        Self::new(
            ErrorCode::RangeViolation,
            Issue::new("does not match pattern {pattern}").arg("pattern", pattern),
        )
    }

    pub fn enum_mismatch(actual: &Value, allowed: Vec<Value>) -> Self {
        Self::new(
            ErrorCode::EnumMismatch,
            Issue::new("must be one of {allowed}, got {actual:?}")
                .arg("allowed", Value::List(allowed))
                .arg("actual", actual.clone()),
        )
    }

    pub fn unknown_discriminator(actual: &Value, allowed: Vec<Value>) -> Self {
        Self::new(
            ErrorCode::Discriminator,
            Issue::new("unknown discriminator value {actual:?}, expected one of {allowed}")
                .arg("actual", actual.clone())
                .arg("allowed", Value::List(allowed)),
        )
    }

    /// Replaces the human message, keeping code, issue and path.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Places the error below the current node, e.g. on a sibling field
    /// flagged by a cross-field refinement.
    #[must_use]
    pub fn at<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        let relative: Path = segments.into_iter().map(Into::into).collect();
        let mut path = relative;
        path.prepend_path(&self.path);
        self.path = path;
        self
    }

    /// Prepends an outer segment.
    #[must_use]
    pub fn with_prefix(mut self, segment: PathSegment) -> Self {
        self.path.prepend(segment);
        self
    }

    pub(crate) fn prefix_path(&mut self, outer: &Path) {
        self.path.prepend_path(outer);
    }

    #[inline]
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    #[inline]
    #[must_use]
    pub fn issue(&self) -> &Issue {
        &self.issue
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every error found in one parse, plus the best-effort output.
///
/// Returned by the `Result`-shaped entrypoints so callers can use `?`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", ReportConfig::default().format_errors(.errors.iter()))]
pub struct ValidationErrors {
    errors: ErrorVec<ValidationError>,
    partial: Option<Value>,
}

impl ValidationErrors {
    pub(crate) fn new(errors: ErrorVec<ValidationError>, partial: Option<Value>) -> Self {
        Self { errors, partial }
    }

    #[inline]
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    #[inline]
    #[must_use]
    pub fn partial(&self) -> Option<&Value> {
        self.partial.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn into_errors(self) -> ErrorVec<ValidationError> {
        self.errors
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
