//! Read-only views over array storage.

use std::ops::Deref;
use std::slice;

/// Non-owning, read-only alias of an array's current elements.
///
/// The view borrows the array, so the array cannot be mutated (and in
/// particular cannot regrow) while the view is alive.
#[derive(Debug, PartialEq, Eq)]
pub struct ArrayView<'a, T> {
    data: &'a [T],
}

impl<T> Clone for ArrayView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayView<'_, T> {}

impl<'a, T> ArrayView<'a, T> {
    pub(crate) fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    /// Number of elements visible through the view.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `pos`, if in range.
    pub fn get(&self, pos: usize) -> Option<&'a T> {
        self.data.get(pos)
    }

    /// The viewed elements as a slice with the view's lifetime.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Iterate over the viewed elements.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.data.iter()
    }
}

impl<T> Deref for ArrayView<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.data
    }
}

impl<'a, T> IntoIterator for ArrayView<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
