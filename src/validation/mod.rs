//! The [`Validation`] outcome type.
//!
//! Every parse returns a [`Validation`]: either the fully parsed value, or the
//! complete list of errors found in one pass together with a best-effort
//! partial value.
//!
//! # Examples
//!
//! ```
//! use schema_rail::validation::Validation;
//!
//! let valid: Validation<String, i32> = Validation::Valid(42);
//! assert!(valid.is_valid());
//!
//! let invalid: Validation<&str, i32> = Validation::invalid_many(["err1", "err2"]);
//! assert_eq!(invalid.iter_errors().count(), 2);
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;

use crate::types::{ValidationError, Value};

/// Result of parsing a [`Value`] against a schema.
pub type ParseResult = Validation<ValidationError, Value>;
