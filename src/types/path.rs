//! Locations inside nested input.
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::value::Value;

/// One step from a container to a child: a record/map key or a sequence/tuple index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl PathSegment {
    /// Builds a key segment from a declared or input key.
    ///
    /// Keys without a textual form fall back to their display rendering.
    #[must_use]
    pub fn key(key: &Value) -> Self {
        match key.key_text() {
            Some(text) => Self::Key(text.into_owned()),
            None => Self::Key(key.to_string()),
        }
    }
}

impl From<&str> for PathSegment {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Key(s.to_owned())
    }
}

impl From<String> for PathSegment {
    #[inline]
    fn from(s: String) -> Self {
        Self::Key(s)
    }
}

impl From<usize> for PathSegment {
    #[inline]
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => f.write_str(k),
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// Root-to-leaf sequence of segments. Empty at the schema root.
///
/// # Examples
///
/// ```
/// use schema_rail::{Path, PathSegment};
///
/// let path = Path::from_iter([PathSegment::from("users"), 2usize.into(), "email".into()]);
/// assert_eq!(path.to_string(), "users[2].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self { segments: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns a new path one level deeper.
    #[must_use]
    pub fn join(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment.into());
        Self { segments }
    }

    /// Adds an outer segment in front. Used while errors travel upward.
    pub fn prepend(&mut self, segment: PathSegment) {
        self.segments.insert(0, segment);
    }

    /// Concatenates `outer` in front of this path.
    pub fn prepend_path(&mut self, outer: &Path) {
        if outer.is_root() {
            return;
        }
        let tail = std::mem::take(&mut self.segments);
        self.segments.reserve(outer.len() + tail.len());
        self.segments.extend(outer.segments.iter().cloned());
        self.segments.extend(tail);
    }

    #[must_use]
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.segments.starts_with(&prefix.segments)
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self { segments: iter.into_iter().collect() }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(k) if i > 0 => write!(f, ".{k}")?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}
