use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::Serialize;
use smallvec::smallvec;

/// Outcome of a validation that accumulates every error instead of failing fast.
///
/// Unlike `Result`, the failure side keeps a best-effort `partial` value next
/// to the errors, so partially valid input can be shown back to a user.
///
/// # Variants
///
/// * `Valid(A)` - Fully valid value
/// * `Invalid { errors, partial }` - One or more errors, plus whatever could be salvaged
///
/// # Examples
///
/// ```
/// use schema_rail::validation::Validation;
///
/// let valid = Validation::<&str, i32>::valid(42);
/// assert!(valid.is_valid());
///
/// let invalid = Validation::<&str, i32>::invalid("error").with_partial(7);
/// assert!(invalid.is_invalid());
/// assert_eq!(invalid.partial(), Some(&7));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, PartialEq, Debug)]
pub enum Validation<E, A> {
    Valid(A),
    Invalid { errors: ErrorVec<E>, partial: Option<A> },
}

impl<E, A> Validation<E, A> {
    /// Creates a valid value.
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid outcome from a single error, with no partial value.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid("missing field");
    /// assert!(v.is_invalid());
    /// assert!(v.partial().is_none());
    /// ```
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid { errors: smallvec![error], partial: None }
    }

    /// Creates an invalid outcome from an iterator of errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid_many(["missing", "invalid"]);
    /// assert_eq!(v.into_errors().unwrap().len(), 2);
    /// ```
    #[inline]
    pub fn invalid_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::Invalid { errors: errors.into_iter().collect(), partial: None }
    }

    /// Builds an outcome from collected errors: valid when `errors` is empty.
    pub fn from_parts(value: A, errors: ErrorVec<E>) -> Self {
        if errors.is_empty() {
            Self::Valid(value)
        } else {
            Self::Invalid { errors, partial: Some(value) }
        }
    }

    /// Attaches a best-effort value to an invalid outcome. No-op when valid.
    #[inline]
    pub fn with_partial(self, value: A) -> Self {
        match self {
            Self::Valid(v) => Self::Valid(v),
            Self::Invalid { errors, .. } => Self::Invalid { errors, partial: Some(value) },
        }
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Maps the valid value and the partial value alike.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(21);
    /// assert_eq!(v.map(|x| x * 2).into_value(), Some(42));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid { errors, partial } => Validation::Invalid { errors, partial: partial.map(f) },
        }
    }

    /// Chains a computation that may produce further errors.
    ///
    /// `f` only runs on valid values; an invalid outcome keeps its errors and
    /// drops its partial value, which `f` never saw.
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid { errors, .. } => Validation::Invalid { errors, partial: None },
        }
    }

    /// Calls `op` with the errors and partial value when invalid.
    #[inline]
    pub fn or_else<F>(self, op: F) -> Validation<E, A>
    where
        F: FnOnce(ErrorVec<E>, Option<A>) -> Validation<E, A>,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid { errors, partial } => op(errors, partial),
        }
    }

    /// Combines two outcomes, accumulating the errors of both.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_rail::validation::Validation;
    ///
    /// let v1 = Validation::<&str, i32>::invalid("error1");
    /// let v2 = Validation::<&str, i32>::invalid("error2");
    /// assert_eq!(v1.zip(v2).into_errors().unwrap().len(), 2);
    /// ```
    #[inline]
    pub fn zip<B>(self, other: Validation<E, B>) -> Validation<E, (A, B)> {
        match (self, other) {
            (Validation::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Validation::Invalid { errors, partial }, Validation::Valid(b)) => {
                Validation::Invalid { errors, partial: partial.map(|a| (a, b)) }
            }
            (Validation::Valid(a), Validation::Invalid { errors, partial }) => {
                Validation::Invalid { errors, partial: partial.map(|b| (a, b)) }
            }
            (
                Validation::Invalid { errors: mut e1, partial: p1 },
                Validation::Invalid { errors: e2, partial: p2 },
            ) => {
                e1.extend(e2);
                Validation::Invalid { errors: e1, partial: p1.zip(p2) }
            }
        }
    }

    /// Maps each error while preserving the success branch.
    #[inline]
    pub fn map_err<F, G>(self, f: F) -> Validation<G, A>
    where
        F: Fn(E) -> G,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid { errors, partial } => {
                Validation::Invalid { errors: errors.into_iter().map(f).collect(), partial }
            }
        }
    }

    /// Converts into a `Result`, discarding the partial value.
    #[inline]
    pub fn to_result(self) -> Result<A, ErrorVec<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid { errors, .. } => Err(errors),
        }
    }

    /// Wraps a `Result`, turning the error side into a singleton list.
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid { errors, .. } => Some(errors),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid { .. } => None,
        }
    }

    /// Splits into the best-effort value and the error list.
    #[inline]
    pub fn into_parts(self) -> (Option<A>, ErrorVec<E>) {
        match self {
            Self::Valid(value) => (Some(value), ErrorVec::new()),
            Self::Invalid { errors, partial } => (partial, errors),
        }
    }

    /// The valid value, or the partial one when invalid.
    #[must_use]
    #[inline]
    pub fn best_effort(self) -> Option<A> {
        self.into_parts().0
    }

    #[must_use]
    #[inline]
    pub fn partial(&self) -> Option<&A> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid { partial, .. } => partial.as_ref(),
        }
    }

    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[E] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid { errors, .. } => errors,
        }
    }
}
