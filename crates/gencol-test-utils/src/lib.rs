//! Test utilities for gencol development.
//!
//! Provides drop-tracking element types for ownership checks, element
//! fixtures that need a non-structural comparator ([`fixtures`]), and
//! proptest strategies producing random operation sequences ([`ops`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod ops;

use std::cell::Cell;
use std::rc::Rc;

/// Shared drop counter for [`Tracked`] values.
///
/// Every `Tracked` created from the same tracker bumps the count exactly
/// once when dropped, so a test can assert that a container released each
/// element once (no leak, no double drop).
#[derive(Clone, Debug, Default)]
pub struct DropTracker {
    drops: Rc<Cell<usize>>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracked element carrying `value`.
    pub fn track(&self, value: i32) -> Tracked {
        Tracked {
            value,
            drops: Rc::clone(&self.drops),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// Element that records its own drop in a [`DropTracker`].
#[derive(Debug)]
pub struct Tracked {
    pub value: i32,
    drops: Rc<Cell<usize>>,
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
