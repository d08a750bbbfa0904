//! Construction-time failures.
//!
//! These are programmer errors in a schema definition, never user-input
//! errors. The `try_*` constructors return them; the plain constructors panic
//! with the same message.
use thiserror::Error;

use crate::types::error::ValidationErrors;
use crate::types::value::Value;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("field {key} is declared more than once")]
    DuplicateField { key: Value },

    #[error("discriminator value {value} is used by more than one branch")]
    DuplicateDiscriminator { value: Value },

    #[error("branch {branch} has no literal field at discriminator key {key}")]
    MissingDiscriminator { key: Value, branch: usize },

    #[error("branch {branch} is not a record schema")]
    NotARecord { branch: usize },

    #[error("default value {value} does not satisfy its schema: {errors}")]
    InvalidDefault { value: Value, errors: ValidationErrors },

    #[error("{0} needs at least one member schema")]
    Empty(&'static str),

    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("lower bound {min} exceeds upper bound {max}")]
    InvalidBounds { min: f64, max: f64 },
}

/// Result alias for fallible schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Unwraps a construction result, aborting with the error message.
#[track_caller]
pub(crate) fn abort_on_error<T>(result: SchemaResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, "invalid schema definition");
            panic!("invalid schema: {err}")
        }
    }
}
