//! The contiguous array engine.
//!
//! [`RawArray`] keeps its own logical capacity instead of trusting
//! `Vec::capacity`, so growth follows the configured [`GrowthFactor`]
//! exactly and is observable through [`RawArray::capacity`]. All
//! reallocation goes through `try_reserve_exact`: a failed grow or shrink
//! reports [`ContainerError::AllocFail`] and leaves the old buffer in place.

use std::fmt;
use std::mem;
use std::slice;

use gencol_core::{ArrayConfig, Comparator, ContainerError, GrowthFactor};
use tracing::trace;

use crate::view::ArrayView;

/// Growable contiguous array with an explicit growth policy.
///
/// Capacity grows only when an insert finds the array full, and shrinks
/// only through [`shrink_to_fit`](RawArray::shrink_to_fit) or
/// [`deinit`](RawArray::deinit).
pub struct RawArray<T> {
    /// Backing storage; `buf.len()` is the element count.
    buf: Vec<T>,
    /// Logical capacity. `buf.capacity() >= cap` always holds.
    cap: usize,
    growth: GrowthFactor,
}

impl<T> RawArray<T> {
    /// Allocate an array for `config.initial_capacity` elements.
    ///
    /// Fails with `InvalidArg` for a zero initial capacity or a zero-sized
    /// element type, and with `AllocFail` if the buffer cannot be allocated.
    pub fn new(config: ArrayConfig) -> Result<Self, ContainerError> {
        config.validate_for(mem::size_of::<T>())?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(config.initial_capacity)
            .map_err(|_| alloc_fail::<T>(config.initial_capacity))?;
        Ok(Self {
            buf,
            cap: config.initial_capacity,
            growth: config.growth_factor,
        })
    }

    /// Allocate with the given capacity and the default growth factor.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, ContainerError> {
        Self::new(ArrayConfig::with_capacity(initial_capacity))
    }

    /// Release the buffer and reset to the empty state (`len == capacity == 0`).
    ///
    /// Safe to call more than once. The array stays usable: the next insert
    /// allocates a one-element buffer and growth resumes from there.
    pub fn deinit(&mut self) {
        let released = self.buf.len();
        self.buf = Vec::new();
        self.cap = 0;
        trace!(released, "array deinitialized");
    }

    /// Insert `value` at `pos`, shifting `[pos, len)` one slot right.
    ///
    /// `pos == len` appends. Grows the buffer first if it is full.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<(), ContainerError> {
        let len = self.buf.len();
        if pos > len {
            return Err(ContainerError::OutOfBounds { pos, len });
        }
        if len == self.cap {
            self.grow()?;
        }
        self.buf.insert(pos, value);
        Ok(())
    }

    /// Remove and return the element at `pos`, shifting the tail left.
    pub fn remove_at(&mut self, pos: usize) -> Result<T, ContainerError> {
        let len = self.buf.len();
        if pos >= len {
            return Err(ContainerError::OutOfBounds { pos, len });
        }
        Ok(self.buf.remove(pos))
    }

    /// Append `value`.
    pub fn push_back(&mut self, value: T) -> Result<(), ContainerError> {
        let len = self.buf.len();
        self.insert(len, value)
            .map_err(|e| e.into_composite("push_back: insert at len failed"))
    }

    /// Remove and return the last element. `NoData` if empty.
    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        let Some(last) = self.buf.len().checked_sub(1) else {
            return Err(ContainerError::NoData);
        };
        self.remove_at(last)
            .map_err(|e| e.into_composite("pop_back: remove at len - 1 failed"))
    }

    /// Index of the first element equivalent to `value` under `cmp`.
    pub fn find<C>(&self, value: &T, cmp: &C) -> Option<usize>
    where
        C: Comparator<T> + ?Sized,
    {
        self.buf.iter().position(|stored| cmp.equivalent(stored, value))
    }

    /// Whether any element is equivalent to `value` under `cmp`.
    pub fn exists<C>(&self, value: &T, cmp: &C) -> bool
    where
        C: Comparator<T> + ?Sized,
    {
        self.find(value, cmp).is_some()
    }

    /// Remove and return the first element equivalent to `value`.
    ///
    /// `NoData` if nothing matches.
    pub fn remove_by_value<C>(&mut self, value: &T, cmp: &C) -> Result<T, ContainerError>
    where
        C: Comparator<T> + ?Sized,
    {
        let pos = self.find(value, cmp).ok_or(ContainerError::NoData)?;
        self.remove_at(pos)
            .map_err(|e| e.into_composite("remove_by_value: found index not removable"))
    }

    /// Reallocate down to exactly `len` elements.
    ///
    /// No-op when already full. On `AllocFail` the array keeps its old
    /// buffer and capacity.
    pub fn shrink_to_fit(&mut self) -> Result<(), ContainerError> {
        let len = self.buf.len();
        if len == self.cap {
            return Ok(());
        }
        let mut fitted = Vec::new();
        fitted
            .try_reserve_exact(len)
            .map_err(|_| alloc_fail::<T>(len))?;
        fitted.append(&mut self.buf);
        self.buf = fitted;
        trace!(old_capacity = self.cap, new_capacity = len, "array shrunk");
        self.cap = len;
        Ok(())
    }

    /// Element at `pos`, if in range.
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.buf.get(pos)
    }

    /// Mutable element at `pos`, if in range.
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.buf.get_mut(pos)
    }

    /// Read-only view of the current elements.
    pub fn view(&self) -> ArrayView<'_, T> {
        ArrayView::new(&self.buf)
    }

    /// The current elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// The current elements as a mutable slice. Cannot change the length.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Allocated element capacity.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// The configured growth factor.
    pub fn growth_factor(&self) -> GrowthFactor {
        self.growth
    }

    fn grow(&mut self) -> Result<(), ContainerError> {
        let len = self.buf.len();
        let new_cap = self.growth.next_capacity(len, self.cap);
        self.buf
            .try_reserve_exact(new_cap - len)
            .map_err(|_| alloc_fail::<T>(new_cap))?;
        trace!(old_capacity = self.cap, new_capacity = new_cap, "array grown");
        self.cap = new_cap;
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a RawArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for RawArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawArray")
            .field("len", &self.buf.len())
            .field("capacity", &self.cap)
            .field("growth_factor", &self.growth.get())
            .field("elements", &self.buf)
            .finish()
    }
}

fn alloc_fail<T>(elements: usize) -> ContainerError {
    ContainerError::AllocFail {
        requested_bytes: elements.saturating_mul(mem::size_of::<T>()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gencol_core::{ErrorKind, StructuralEq};

    fn array(cap: usize, growth: f64) -> RawArray<i32> {
        RawArray::new(ArrayConfig::new(cap, growth).unwrap()).unwrap()
    }

    #[test]
    fn growth_from_two_doubles_to_four() {
        let mut a = array(2, 2.0);
        for v in [10, 20, 30] {
            a.push_back(v).unwrap();
        }
        assert_eq!(a.capacity(), 4);
        assert_eq!(a.as_slice(), &[10, 20, 30]);

        a.insert(1, 99).unwrap();
        assert_eq!(a.as_slice(), &[10, 99, 20, 30]);

        assert_eq!(a.remove_at(0).unwrap(), 10);
        assert_eq!(a.as_slice(), &[99, 20, 30]);
    }

    #[test]
    fn zero_capacity_rejected() {
        let err = RawArray::<u8>::with_capacity(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArg);
    }

    #[test]
    fn zero_sized_element_rejected() {
        let err = RawArray::<()>::with_capacity(4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArg);
    }

    #[test]
    fn oversized_initial_allocation_reports_alloc_fail() {
        let err = RawArray::<u64>::with_capacity(usize::MAX / 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AllocFail);
    }

    #[test]
    fn failed_grow_leaves_array_untouched() {
        // A huge factor makes the next capacity overflow the allocator.
        let mut a = array(1, 1e300);
        a.push_back(1).unwrap();
        let err = a.push_back(2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AllocFail);
        assert_eq!(a.as_slice(), &[1]);
        assert_eq!(a.capacity(), 1);
    }

    #[test]
    fn insert_past_len_is_out_of_bounds() {
        let mut a = array(4, 2.0);
        a.push_back(1).unwrap();
        assert_eq!(
            a.insert(2, 5),
            Err(ContainerError::OutOfBounds { pos: 2, len: 1 })
        );
    }

    #[test]
    fn remove_at_len_is_out_of_bounds() {
        let mut a = array(4, 2.0);
        a.push_back(1).unwrap();
        assert_eq!(
            a.remove_at(1),
            Err(ContainerError::OutOfBounds { pos: 1, len: 1 })
        );
    }

    #[test]
    fn pop_back_on_empty_is_no_data() {
        let mut a = array(4, 2.0);
        assert_eq!(a.pop_back(), Err(ContainerError::NoData));
    }

    #[test]
    fn pop_back_is_lifo() {
        let mut a = array(2, 1.5);
        for v in 0..5 {
            a.push_back(v).unwrap();
        }
        let popped: Vec<_> = std::iter::from_fn(|| a.pop_back().ok()).collect();
        assert_eq!(popped, vec![4, 3, 2, 1, 0]);
        assert!(a.is_empty());
    }

    #[test]
    fn find_returns_first_match() {
        let mut a = array(4, 2.0);
        for v in [5, 7, 5, 9] {
            a.push_back(v).unwrap();
        }
        assert_eq!(a.find(&5, &StructuralEq), Some(0));
        assert_eq!(a.find(&9, &StructuralEq), Some(3));
        assert_eq!(a.find(&1, &StructuralEq), None);
        assert!(a.exists(&7, &StructuralEq));
    }

    #[test]
    fn find_on_empty_is_none() {
        let a = array(4, 2.0);
        assert_eq!(a.find(&0, &StructuralEq), None);
        assert!(!a.exists(&0, &StructuralEq));
    }

    #[test]
    fn find_with_custom_comparator() {
        let mut a = array(4, 2.0);
        for v in [-3, 4] {
            a.push_back(v).unwrap();
        }
        let by_abs = |x: &i32, y: &i32| x.abs().cmp(&y.abs());
        assert_eq!(a.find(&3, &by_abs), Some(0));
    }

    #[test]
    fn remove_by_value_removes_first_occurrence() {
        let mut a = array(4, 2.0);
        for v in [1, 2, 1] {
            a.push_back(v).unwrap();
        }
        assert_eq!(a.remove_by_value(&1, &StructuralEq), Ok(1));
        assert_eq!(a.as_slice(), &[2, 1]);
        assert_eq!(
            a.remove_by_value(&8, &StructuralEq),
            Err(ContainerError::NoData)
        );
    }

    #[test]
    fn removal_never_shrinks_capacity() {
        let mut a = array(2, 2.0);
        for v in 0..8 {
            a.push_back(v).unwrap();
        }
        let cap = a.capacity();
        while a.pop_back().is_ok() {}
        assert_eq!(a.capacity(), cap);
    }

    #[test]
    fn shrink_to_fit_matches_len() {
        let mut a = array(16, 2.0);
        for v in 0..5 {
            a.push_back(v).unwrap();
        }
        a.shrink_to_fit().unwrap();
        assert_eq!(a.capacity(), 5);
        assert_eq!(a.as_slice(), &[0, 1, 2, 3, 4]);

        // Full array grows again from the fitted capacity.
        a.push_back(5).unwrap();
        assert_eq!(a.capacity(), 10);
    }

    #[test]
    fn shrink_empty_array_releases_buffer() {
        let mut a = array(8, 2.0);
        a.shrink_to_fit().unwrap();
        assert_eq!(a.capacity(), 0);
        a.push_back(1).unwrap();
        assert_eq!(a.capacity(), 1);
    }

    #[test]
    fn deinit_resets_and_array_stays_usable() {
        let mut a = array(4, 2.0);
        a.push_back(1).unwrap();
        a.deinit();
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 0);
        a.deinit();
        a.push_back(2).unwrap();
        assert_eq!(a.as_slice(), &[2]);
    }

    #[test]
    fn view_aliases_current_elements() {
        let mut a = array(4, 2.0);
        a.push_back(3).unwrap();
        a.push_back(4).unwrap();
        let view = a.view();
        assert_eq!(view.len(), 2);
        assert_eq!(view.as_slice(), &[3, 4]);
    }

    #[test]
    fn get_mut_writes_in_place() {
        let mut a = array(4, 2.0);
        a.push_back(1).unwrap();
        *a.get_mut(0).unwrap() = 42;
        assert_eq!(a.get(0), Some(&42));
        assert_eq!(a.get(1), None);
    }

    #[test]
    fn mut_slice_reorders_without_resizing() {
        let mut a = array(4, 2.0);
        for v in [3, 1, 2] {
            a.push_back(v).unwrap();
        }
        a.as_mut_slice().sort_unstable();
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(a.len(), 3);
        assert_eq!(a.capacity(), 4);
    }
}
