use std::borrow::Cow;

use crate::pipeline::{Refinement, Transform};
use crate::types::{Map, Value};

/// Per-node settings shared by every schema variant.
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `required` | unset | Forces (`Some(true)`) or waives (`Some(false)`) presence inside records |
/// | `coerce` | `false` | Allow type-specific coercion and string-normalized key matching |
/// | `custom_error` | none | Replaces the message of structural errors raised at this node |
/// | `description` | none | Free text for documentation tooling |
/// | `annotations` | empty | Opaque user bag; the engine never reads it |
/// | `transforms` | empty | Run first, in order, after a structural success |
/// | `refinements` | empty | Run after transforms, in order, all of them |
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    pub(crate) required: Option<bool>,
    pub(crate) coerce: bool,
    pub(crate) custom_error: Option<Cow<'static, str>>,
    pub(crate) description: Option<String>,
    pub(crate) annotations: Map,
    pub(crate) refinements: Vec<Refinement>,
    pub(crate) transforms: Vec<Transform>,
}

impl Metadata {
    #[inline]
    pub fn required(&self) -> Option<bool> {
        self.required
    }

    #[inline]
    pub fn coerce(&self) -> bool {
        self.coerce
    }

    #[inline]
    pub fn custom_error(&self) -> Option<&str> {
        self.custom_error.as_deref()
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    pub fn annotations(&self) -> &Map {
        &self.annotations
    }

    #[inline]
    pub fn annotation(&self, key: &str) -> Option<&Value> {
        self.annotations.get(&Value::from(key))
    }

    #[inline]
    pub fn refinements(&self) -> &[Refinement] {
        &self.refinements
    }

    #[inline]
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }
}
