//! Schema-driven validation and normalization of structured values.
//!
//! A [`Schema`] is an immutable tree of rules. Parsing a [`Value`] against it
//! walks both trees together, coerces where allowed, and reports **every**
//! error in one pass, each located by its [`Path`], next to a best-effort
//! output that keeps whatever parsed.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `schema_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Records and Error Paths
//!
//! ```
//! use schema_rail::{fields, map, Schema, StringOptions};
//!
//! let signup = Schema::record(fields! {
//!     "email" => Schema::string_with(StringOptions::default().pattern(r"^[^@]+@[^@]+$")),
//!     "address" => Schema::record(fields! { "zip" => Schema::string() }),
//! });
//!
//! let input = map! { "email" => "nope", "address" => map! { "zip" => 12345 } };
//! let errors = signup.validate(&input).unwrap_err();
//!
//! let paths: Vec<String> = errors.errors().iter().map(|e| e.path().to_string()).collect();
//! assert_eq!(paths, ["email", "address.zip"]);
//! ```
//!
//! ## Partial Output
//!
//! ```
//! use schema_rail::{Schema, Value};
//!
//! let numbers = Schema::sequence(Schema::integer());
//! let input = Value::from(vec![Value::Int(1), Value::from("two"), Value::Int(3)]);
//!
//! let parsed = numbers.parse(&input);
//! assert_eq!(parsed.errors().len(), 1);
//! assert_eq!(parsed.partial(), Some(&input));
//! ```
//!
//! ## Tagged Dispatch
//!
//! ```
//! use schema_rail::{fields, map, ErrorCode, Schema};
//!
//! let shape = Schema::discriminated("kind", [
//!     Schema::record(fields! { "kind" => Schema::literal("circle"), "r" => Schema::float() }),
//!     Schema::record(fields! { "kind" => Schema::literal("square"), "side" => Schema::float() }),
//! ]);
//!
//! assert!(shape.parse(&map! { "kind" => "circle", "r" => 1.0 }).is_valid());
//!
//! let errors = shape.parse(&map! { "kind" => "square" }).into_errors().unwrap();
//! assert_eq!(errors[0].code(), ErrorCode::Required);
//! assert_eq!(errors[0].path().to_string(), "side");
//! ```

/// Traversal engine and parse entrypoints
pub mod engine;
/// Record and value construction macros
pub mod macros;
/// Transform and refinement stage run after structural success
pub mod pipeline;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Schema nodes, their constructors and option structs
pub mod schema;
/// Conversion traits used by user-supplied checks
pub mod traits;
/// Values, paths, errors and reports
pub mod types;
/// Validation type for error accumulation with partial results
pub mod validation;

pub use engine::{parse, ParseContext, ParseOptions};
pub use schema::{
    Kind, NumberOptions, RecordOptions, Schema, SequenceOptions, StringOptions, UnknownKeys,
};
pub use traits::IntoFailure;
pub use types::{
    error_formatter::{ErrorFormatter, ReportConfig},
    Accumulator, ErrorCode, ErrorVec, Issue, Map, Path, PathSegment, SchemaError, SchemaResult,
    ValidationError, ValidationErrors, Value,
};
pub use validation::{ParseResult, Validation};
