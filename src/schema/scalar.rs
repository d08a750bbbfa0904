//! Scalar leaves and their coercion rules.
//!
//! Every scalar follows the same pattern: accept the native kind as is; when
//! coercion is enabled, try one type-specific conversion; then check bounds.
use std::fmt;

use regex::Regex;

use crate::schema::options::{NumberOptions, StringOptions};
use crate::types::{SchemaError, SchemaResult, ValidationError, Value};

/// Floats in `I64_MIN..I64_END` convert to `i64` without saturating.
const I64_MIN: f64 = -9_223_372_036_854_775_808.0;
const I64_END: f64 = 9_223_372_036_854_775_808.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    /// Integer or float.
    Number,
    Boolean,
}

impl ScalarKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A compiled regular expression constraint.
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> SchemaResult<Self> {
        Regex::new(source).map(Self).map_err(|e| SchemaError::InvalidPattern {
            pattern: source.to_owned(),
            reason: e.to_string(),
        })
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// A scalar rule: kind plus the constraints relevant to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    kind: ScalarKind,
    text: StringOptions,
    range: NumberOptions,
}

impl Scalar {
    pub(crate) fn new(kind: ScalarKind) -> Self {
        Self { kind, text: StringOptions::default(), range: NumberOptions::default() }
    }

    pub(crate) fn text(options: StringOptions) -> SchemaResult<Self> {
        options.validate()?;
        Ok(Self { text: options, ..Self::new(ScalarKind::String) })
    }

    pub(crate) fn numeric(kind: ScalarKind, options: NumberOptions) -> SchemaResult<Self> {
        options.validate()?;
        Ok(Self { range: options, ..Self::new(kind) })
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn string_options(&self) -> &StringOptions {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn number_options(&self) -> &NumberOptions {
        &self.range
    }

    /// Returns the input as this scalar's kind, coercing when allowed.
    ///
    /// `None` means a type mismatch.
    #[must_use]
    pub fn accept(&self, input: &Value, coerce: bool) -> Option<Value> {
        match (self.kind, input) {
            (ScalarKind::String, Value::Str(_))
            | (ScalarKind::Integer, Value::Int(_))
            | (ScalarKind::Float, Value::Float(_))
            | (ScalarKind::Number, Value::Int(_) | Value::Float(_))
            | (ScalarKind::Boolean, Value::Bool(_)) => Some(input.clone()),
            _ if coerce => self.coerce(input),
            _ => None,
        }
    }

    fn coerce(&self, input: &Value) -> Option<Value> {
        match self.kind {
            ScalarKind::String => match input {
                Value::Int(i) => Some(Value::Str(i.to_string())),
                Value::Float(f) => Some(Value::Str(f.to_string())),
                Value::Bool(b) => Some(Value::Str(b.to_string())),
                _ => None,
            },
            ScalarKind::Integer => match input {
                Value::Float(f) if f.fract() == 0.0 && (I64_MIN..I64_END).contains(f) => {
                    Some(Value::Int(*f as i64))
                }
                Value::Str(s) => s.trim().parse::<i64>().ok().map(Value::Int),
                _ => None,
            },
            ScalarKind::Float => match input {
                Value::Int(i) => Some(Value::Float(*i as f64)),
                Value::Str(s) => s.trim().parse::<f64>().ok().map(Value::Float),
                _ => None,
            },
            ScalarKind::Number => match input {
                Value::Str(s) => {
                    let s = s.trim();
                    s.parse::<i64>()
                        .map(Value::Int)
                        .or_else(|_| s.parse::<f64>().map(Value::Float))
                        .ok()
                }
                _ => None,
            },
            ScalarKind::Boolean => match input {
                Value::Int(0) => Some(Value::Bool(false)),
                Value::Int(1) => Some(Value::Bool(true)),
                Value::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
                    "true" | "1" | "yes" | "on" => Some(Value::Bool(true)),
                    "false" | "0" | "no" | "off" => Some(Value::Bool(false)),
                    _ => None,
                },
                _ => None,
            },
        }
    }

    /// Checks length, range and pattern constraints. Every failing bound is reported.
    #[must_use]
    pub fn violations(&self, value: &Value) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        match value {
            Value::Str(s) => {
                let len = s.chars().count();
                if let Some(min) = self.text.min_length {
                    if len < min {
                        errors.push(ValidationError::too_small(min as i64, len as i64));
                    }
                }
                if let Some(max) = self.text.max_length {
                    if len > max {
                        errors.push(ValidationError::too_big(max as i64, len as i64));
                    }
                }
                if let Some(pattern) = &self.text.pattern {
                    if !pattern.is_match(s) {
                        errors.push(ValidationError::pattern_mismatch(pattern.as_str()));
                    }
                }
            }
            Value::Int(_) | Value::Float(_) => {
                let Some(n) = value.as_f64() else { return errors };
                if let Some(min) = self.range.min {
                    if n < min {
                        errors.push(ValidationError::too_small(bound(min), value.clone()));
                    }
                }
                if let Some(max) = self.range.max {
                    if n > max {
                        errors.push(ValidationError::too_big(bound(max), value.clone()));
                    }
                }
            }
            _ => {}
        }
        errors
    }
}

/// Renders a numeric bound as an integer when it is one.
fn bound(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        Value::Int(n as i64)
    } else {
        Value::Float(n)
    }
}
