use crate::types::error::ValidationError;
use crate::types::path::{Path, PathSegment};
use crate::types::ErrorVec;

/// Ordered, append-only collector threaded through the traversal.
///
/// Each composite boundary merges its children's collectors into its own with
/// [`Accumulator::absorb`], which prefixes exactly one path segment per level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Accumulator<T> {
    items: ErrorVec<T>,
}

impl<T> Accumulator<T> {
    /// Creates a new empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self { items: ErrorVec::new() }
    }

    /// Adds a single item to the accumulator.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Extends the accumulator with items from an iterator.
    #[inline]
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }

    /// Returns true if the accumulator is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in the accumulator.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the accumulator and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<T> {
        self.items
    }
}

impl Accumulator<ValidationError> {
    /// Merges errors reported by a child located at `segment`.
    pub fn absorb<I>(&mut self, segment: &PathSegment, errors: I)
    where
        I: IntoIterator<Item = ValidationError>,
    {
        self.items.extend(errors.into_iter().map(|e| e.with_prefix(segment.clone())));
    }

    /// Merges errors reported relative to `outer`.
    pub fn absorb_at<I>(&mut self, outer: &Path, errors: I)
    where
        I: IntoIterator<Item = ValidationError>,
    {
        self.items.extend(errors.into_iter().map(|mut e| {
            e.prefix_path(outer);
            e
        }));
    }

    /// Errors located exactly at `path`.
    pub fn at<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.items.iter().filter(move |e| e.path() == path)
    }
}

impl<T> From<ErrorVec<T>> for Accumulator<T> {
    fn from(items: ErrorVec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Accumulator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> IntoIterator for Accumulator<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
