use std::fmt;

use gencol_array::{ArrayView, RawArray};
use gencol_core::{ArrayConfig, Comparator, ContainerError, GrowthFactor, StructuralEq};

/// Growable array of `T` bound to the comparator `C`.
///
/// A thin wrapper over [`RawArray`]: structural operations delegate
/// directly, and value lookups use the stored comparator.
pub struct Vector<T, C = StructuralEq> {
    raw: RawArray<T>,
    cmp: C,
}

impl<T: PartialEq> Vector<T, StructuralEq> {
    /// Array compared by `PartialEq`.
    pub fn new(config: ArrayConfig) -> Result<Self, ContainerError> {
        Self::with_comparator(config, StructuralEq)
    }

    /// Array compared by `PartialEq`, with the default growth factor.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, ContainerError> {
        Self::new(ArrayConfig::with_capacity(initial_capacity))
    }
}

impl<T, C: Comparator<T>> Vector<T, C> {
    /// Array using `cmp` for value lookups.
    pub fn with_comparator(config: ArrayConfig, cmp: C) -> Result<Self, ContainerError> {
        Ok(Self {
            raw: RawArray::new(config)?,
            cmp,
        })
    }

    /// Index of the first element equivalent to `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.raw.find(value, &self.cmp)
    }

    /// Whether any element is equivalent to `value`.
    pub fn exists(&self, value: &T) -> bool {
        self.raw.exists(value, &self.cmp)
    }

    /// Remove and return the first element equivalent to `value`.
    pub fn remove_by_value(&mut self, value: &T) -> Result<T, ContainerError> {
        self.raw.remove_by_value(value, &self.cmp)
    }

    /// Release the buffer. See [`RawArray::deinit`].
    pub fn deinit(&mut self) {
        self.raw.deinit();
    }

    /// Insert `value` at `pos`. See [`RawArray::insert`].
    pub fn insert(&mut self, pos: usize, value: T) -> Result<(), ContainerError> {
        self.raw.insert(pos, value)
    }

    /// Remove and return the element at `pos`.
    pub fn remove_at(&mut self, pos: usize) -> Result<T, ContainerError> {
        self.raw.remove_at(pos)
    }

    /// Append `value`.
    pub fn push_back(&mut self, value: T) -> Result<(), ContainerError> {
        self.raw.push_back(value)
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        self.raw.pop_back()
    }

    /// Reallocate down to exactly `len` elements.
    pub fn shrink_to_fit(&mut self) -> Result<(), ContainerError> {
        self.raw.shrink_to_fit()
    }

    /// Element at `pos`.
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.raw.get(pos)
    }

    /// Mutable element at `pos`.
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.raw.get_mut(pos)
    }

    /// Read-only view of the elements.
    pub fn view(&self) -> ArrayView<'_, T> {
        self.raw.view()
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.raw.as_slice()
    }

    /// Iterate elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.raw.iter()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the array is empty.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Logical capacity.
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Configured growth factor.
    pub fn growth_factor(&self) -> GrowthFactor {
        self.raw.growth_factor()
    }

    /// The bound comparator.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The underlying engine.
    pub fn as_raw(&self) -> &RawArray<T> {
        &self.raw
    }

    /// Unwrap into the engine, dropping the comparator.
    pub fn into_raw(self) -> RawArray<T> {
        self.raw
    }
}

impl<'a, T, C> IntoIterator for &'a Vector<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.raw.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Vector<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.raw, f)
    }
}
