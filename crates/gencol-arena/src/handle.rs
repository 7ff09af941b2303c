//! Slot handles.
//!
//! A [`SlotHandle`] names one occupancy of one slot. The `generation` field
//! allows O(1) staleness checks: once the slot is vacated its generation
//! moves on and every handle to the old occupant stops resolving.

use std::fmt;

/// Non-owning reference to a value stored in a [`SlotArena`].
///
/// [`SlotArena`]: crate::SlotArena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct SlotHandle {
    /// Position in the slot table.
    pub(crate) index: u32,
    /// Slot generation when the value was inserted.
    pub(crate) generation: u32,
}

impl SlotHandle {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Position in the slot table.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the occupancy this handle refers to.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for SlotHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotHandle(idx={}, gen={})", self.index, self.generation)
    }
}
