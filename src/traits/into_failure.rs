//! Trait for converting check results into validation errors.
//!
//! Refinements and transforms may fail with whatever is most convenient:
//! a bare message, a located [`ValidationError`], or several of them at once.
//!
//! # Examples
//!
//! ```
//! use schema_rail::traits::IntoFailure;
//! use schema_rail::{ErrorCode, ValidationError};
//!
//! let one = "too short".into_failure();
//! assert_eq!(one[0].code(), ErrorCode::Custom);
//!
//! let many = vec![
//!     ValidationError::custom("a").at(["password"]),
//!     ValidationError::custom("b").at(["confirm"]),
//! ]
//! .into_failure();
//! assert_eq!(many.len(), 2);
//! ```
use std::borrow::Cow;

use crate::types::{ErrorVec, ValidationError};

/// Converts a failure value into one or more [`ValidationError`]s.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be returned as a check failure",
    label = "this type does not implement `IntoFailure`",
    note = "return a message, a `ValidationError`, or a `Vec<ValidationError>`"
)]
pub trait IntoFailure {
    fn into_failure(self) -> ErrorVec<ValidationError>;
}

impl IntoFailure for String {
    #[inline]
    fn into_failure(self) -> ErrorVec<ValidationError> {
        smallvec::smallvec![ValidationError::custom(self)]
    }
}

impl IntoFailure for &'static str {
    #[inline]
    fn into_failure(self) -> ErrorVec<ValidationError> {
        smallvec::smallvec![ValidationError::custom(self)]
    }
}

impl IntoFailure for Cow<'static, str> {
    #[inline]
    fn into_failure(self) -> ErrorVec<ValidationError> {
        smallvec::smallvec![ValidationError::custom(self)]
    }
}

impl IntoFailure for ValidationError {
    #[inline]
    fn into_failure(self) -> ErrorVec<ValidationError> {
        smallvec::smallvec![self]
    }
}

impl IntoFailure for Vec<ValidationError> {
    #[inline]
    fn into_failure(self) -> ErrorVec<ValidationError> {
        ErrorVec::from_vec(self)
    }
}

impl IntoFailure for ErrorVec<ValidationError> {
    #[inline]
    fn into_failure(self) -> ErrorVec<ValidationError> {
        self
    }
}
