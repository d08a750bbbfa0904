//! Conversion traits used at the user-code seams of the engine.
//!
//! - [`IntoFailure`]: what refinement and transform closures may return on failure
pub mod into_failure;

pub use into_failure::IntoFailure;
