//! Values, paths and errors shared by every layer of the engine.
//!
//! # Examples
//!
//! ```
//! use schema_rail::types::{ErrorCode, Path, ValidationError};
//!
//! let err = ValidationError::required().with_prefix("email".into());
//! assert_eq!(err.code(), ErrorCode::Required);
//! assert_eq!(err.path(), &Path::root().join("email"));
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod error;
pub mod error_formatter;
pub mod path;
pub mod schema_error;
pub mod value;

pub use accumulator::Accumulator;
pub use error::*;
pub use path::*;
pub use schema_error::{SchemaError, SchemaResult};
pub use value::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for one element, the common case for a failing leaf.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
