//! Element comparison policies used by `find`, `exists` and value removal.
//!
//! Engines never compare elements implicitly. Every lookup names a
//! [`Comparator`]; types with meaningful derived equality opt in through
//! [`StructuralEq`].

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Decides whether a stored element matches a probe value.
///
/// Any closure `Fn(&T, &T) -> Ordering` is a comparator: a result of
/// [`Ordering::Equal`] is a match, anything else is not.
pub trait Comparator<T> {
    /// Returns `true` if `stored` is equivalent to `probe`.
    fn equivalent(&self, stored: &T, probe: &T) -> bool;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn equivalent(&self, stored: &T, probe: &T) -> bool {
        self(stored, probe) == Ordering::Equal
    }
}

/// Matches elements using their [`PartialEq`] implementation.
///
/// This is the explicit opt-in for "compare by value". It is sound only for
/// types whose `PartialEq` reflects the equivalence the caller wants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StructuralEq;

impl<T: PartialEq> Comparator<T> for StructuralEq {
    #[inline]
    fn equivalent(&self, stored: &T, probe: &T) -> bool {
        stored == probe
    }
}

/// Matches elements whose projected keys are equal.
///
/// ```
/// use gencol_core::{ByKey, Comparator};
///
/// struct Order { id: u64, qty: u32 }
///
/// let by_id = ByKey::new(|o: &Order| o.id);
/// assert!(by_id.equivalent(&Order { id: 7, qty: 1 }, &Order { id: 7, qty: 9 }));
/// ```
pub struct ByKey<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    /// Create a comparator from a key projection.
    pub fn new(key: F) -> Self {
        Self {
            key,
            _key: PhantomData,
        }
    }
}

impl<T, K, F> Comparator<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: PartialEq,
{
    #[inline]
    fn equivalent(&self, stored: &T, probe: &T) -> bool {
        (self.key)(stored) == (self.key)(probe)
    }
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<F, K> fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}
