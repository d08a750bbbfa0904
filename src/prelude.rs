//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use schema_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fields!`], [`map!`]
//! - **Types**: [`Schema`], [`Value`], [`Map`], [`ParseOptions`], [`ValidationError`],
//!   [`ValidationErrors`], [`ErrorCode`], [`Path`]
//! - **Options**: [`StringOptions`], [`NumberOptions`], [`SequenceOptions`], [`RecordOptions`],
//!   [`UnknownKeys`]
//! - **Traits**: [`IntoFailure`]
//!
//! # Examples
//!
//! ```
//! use schema_rail::prelude::*;
//!
//! fn load_port(raw: &Value) -> Result<i64, ValidationErrors> {
//!     let port = Schema::integer_with(NumberOptions::default().between(1, 65535)).coerce();
//!     let value = port.validate(raw)?;
//!     Ok(value.as_i64().unwrap_or_default())
//! }
//!
//! assert_eq!(load_port(&"8080".into()).unwrap(), 8080);
//! assert!(load_port(&"0".into()).is_err());
//! ```

// Macros
pub use crate::{fields, map};

// Core types
pub use crate::engine::ParseOptions;
pub use crate::schema::{
    NumberOptions, RecordOptions, Schema, SequenceOptions, StringOptions, UnknownKeys,
};
pub use crate::types::{ErrorCode, Map, Path, ValidationError, ValidationErrors, Value};
pub use crate::validation::{ParseResult, Validation};

// Traits
pub use crate::traits::IntoFailure;
