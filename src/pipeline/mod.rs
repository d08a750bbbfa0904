//! Post-validation transforms and refinements.
//!
//! Once a node's structural parse succeeds, its [`Pipeline`] runs:
//!
//! 1. **Transforms**, in declaration order. Each maps the current value to a
//!    new one; the first failure stops the remaining transforms.
//! 2. **Refinements**, in declaration order, on the transformed value. Each may
//!    report several errors, and all of them run even after one fails.
//!
//! Errors raised here keep their own messages; a node's custom error
//! override never applies to them.
//!
//! # Examples
//!
//! ```
//! use schema_rail::{Schema, Value};
//!
//! let slug = Schema::string()
//!     .transform(|v, _| Ok::<_, &str>(Value::from(v.as_str().unwrap_or("").to_lowercase())))
//!     .check("must not contain spaces", |v| !v.as_str().unwrap_or("").contains(' '));
//!
//! assert_eq!(slug.parse(&"Hello".into()).into_value(), Some(Value::from("hello")));
//! assert!(slug.parse(&"Hello World".into()).is_invalid());
//! ```
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::schema::Metadata;
use crate::traits::IntoFailure;
use crate::types::{Accumulator, ErrorVec, Path, ValidationError, Value};
use crate::validation::{ParseResult, Validation};

/// What a transform or refinement can see besides the value itself.
#[derive(Debug, Clone, Copy)]
pub struct Check<'a> {
    path: &'a Path,
    input: &'a Value,
    args: &'a [Value],
    context: Option<&'a Value>,
}

impl<'a> Check<'a> {
    /// Absolute location of the node being checked.
    #[inline]
    pub fn path(&self) -> &'a Path {
        self.path
    }

    /// The raw input the node received, before coercion and transforms.
    #[inline]
    pub fn input(&self) -> &'a Value {
        self.input
    }

    /// Extra arguments declared alongside the check.
    #[inline]
    pub fn args(&self) -> &'a [Value] {
        self.args
    }

    /// Caller-supplied context from `ParseOptions::context`.
    #[inline]
    pub fn context(&self) -> Option<&'a Value> {
        self.context
    }
}

type RefineFn = dyn Fn(&Value, &Check<'_>) -> Result<(), ErrorVec<ValidationError>> + Send + Sync;
type TransformFn = dyn Fn(&Value, &Check<'_>) -> Result<Value, ErrorVec<ValidationError>> + Send + Sync;

/// A named post-parse predicate with its declared arguments.
#[derive(Clone)]
pub struct Refinement {
    name: Cow<'static, str>,
    args: Vec<Value>,
    check: Arc<RefineFn>,
}

impl Refinement {
    pub fn new<F, R>(name: impl Into<Cow<'static, str>>, args: Vec<Value>, check: F) -> Self
    where
        F: Fn(&Value, &Check<'_>) -> Result<(), R> + Send + Sync + 'static,
        R: IntoFailure,
    {
        Self {
            name: name.into(),
            args,
            check: Arc::new(move |value, cx| check(value, cx).map_err(IntoFailure::into_failure)),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

impl fmt::Debug for Refinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refinement").field("name", &self.name).field("args", &self.args).finish()
    }
}

/// A named post-parse mapping with its declared arguments.
#[derive(Clone)]
pub struct Transform {
    name: Cow<'static, str>,
    args: Vec<Value>,
    apply: Arc<TransformFn>,
}

impl Transform {
    pub fn new<F, T, R>(name: impl Into<Cow<'static, str>>, args: Vec<Value>, apply: F) -> Self
    where
        F: Fn(&Value, &Check<'_>) -> Result<T, R> + Send + Sync + 'static,
        T: Into<Value>,
        R: IntoFailure,
    {
        Self {
            name: name.into(),
            args,
            apply: Arc::new(move |value, cx| {
                apply(value, cx).map(Into::into).map_err(IntoFailure::into_failure)
            }),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").field("name", &self.name).field("args", &self.args).finish()
    }
}

/// The transform-then-refine stage of one schema node.
#[must_use]
pub struct Pipeline<'m> {
    transforms: &'m [Transform],
    refinements: &'m [Refinement],
}

impl<'m> Pipeline<'m> {
    #[inline]
    pub fn new(meta: &'m Metadata) -> Self {
        Self { transforms: meta.transforms(), refinements: meta.refinements() }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty() && self.refinements.is_empty()
    }

    /// Runs the stage over a structurally valid `value`.
    ///
    /// Errors are relative to the node. On failure the partial value is the
    /// last value successfully produced.
    pub fn run(
        &self,
        value: Value,
        path: &Path,
        input: &Value,
        context: Option<&Value>,
    ) -> ParseResult {
        let mut current = value;
        for transform in self.transforms {
            let cx = Check { path, input, args: &transform.args, context };
            match (transform.apply)(&current, &cx) {
                Ok(next) => current = next,
                Err(errors) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(transform = %transform.name, path = %path, "transform failed");
                    return Validation::Invalid { errors, partial: Some(current) };
                }
            }
        }

        let mut errors = Accumulator::new();
        for refinement in self.refinements {
            let cx = Check { path, input, args: &refinement.args, context };
            if let Err(reported) = (refinement.check)(&current, &cx) {
                #[cfg(feature = "tracing")]
                tracing::trace!(refinement = %refinement.name, path = %path, "refinement failed");
                errors.extend(reported);
            }
        }
        Validation::from_parts(current, errors.into_inner())
    }
}
