//! Generational slot table.
//!
//! [`SlotArena`] stores values in a `Vec` of slots. Vacated slots are
//! chained into an intrusive free list and reused before the table grows,
//! and every vacate bumps the slot's generation so outstanding
//! [`SlotHandle`]s to the old occupant stop resolving. A slot whose
//! generation is exhausted is retired instead of reused, so generations
//! never wrap.

use std::fmt;
use std::mem;

use gencol_core::ContainerError;
use tracing::trace;

use crate::handle::SlotHandle;

/// Largest number of slots a table may hold (indices are `u32`).
const MAX_SLOTS: usize = u32::MAX as usize;

enum Entry<T> {
    Occupied(T),
    /// Vacant slot, linked to the next vacant slot (if any).
    Vacant { next_free: Option<u32> },
    /// Generation exhausted; never handed out again.
    Retired,
}

struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

/// Slot table with stable indices and generation-checked handles.
///
/// Insertion reuses the most recently vacated slot first. Growth goes
/// through `try_reserve`, so an allocation failure is reported as
/// [`ContainerError::AllocFail`] and leaves the table untouched.
pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    /// Head of the vacant-slot chain.
    free_head: Option<u32>,
    /// Number of occupied slots.
    live: usize,
    /// Number of retired slots.
    retired: usize,
}

impl<T> SlotArena<T> {
    /// Create an empty arena. Does not allocate.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            live: 0,
            retired: 0,
        }
    }

    /// Create an empty arena with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        let mut arena = Self::new();
        arena.reserve(capacity)?;
        Ok(arena)
    }

    /// Make room for at least `additional` more values without reallocating.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ContainerError> {
        let vacant = self.slots.len() - self.live - self.retired;
        if additional <= vacant {
            return Ok(());
        }
        let needed = additional - vacant;
        if self.slots.len().saturating_add(needed) > MAX_SLOTS {
            return Err(alloc_fail::<T>(needed));
        }
        let before = self.slots.capacity();
        self.slots
            .try_reserve(needed)
            .map_err(|_| alloc_fail::<T>(needed))?;
        if self.slots.capacity() != before {
            trace!(
                old_capacity = before,
                new_capacity = self.slots.capacity(),
                "slot table grown"
            );
        }
        Ok(())
    }

    /// Store `value` and return a handle to it.
    pub fn insert(&mut self, value: T) -> Result<SlotHandle, ContainerError> {
        if let Some(index) = self.free_head {
            let slot = self
                .slots
                .get_mut(index as usize)
                .ok_or(ContainerError::Unexpected {
                    context: "free list points past the slot table",
                })?;
            let next_free = match slot.entry {
                Entry::Vacant { next_free } => next_free,
                Entry::Occupied(_) | Entry::Retired => {
                    return Err(ContainerError::Unexpected {
                        context: "free list points at a non-vacant slot",
                    })
                }
            };
            slot.entry = Entry::Occupied(value);
            self.free_head = next_free;
            self.live += 1;
            return Ok(SlotHandle::new(index, slot.generation));
        }

        if self.slots.len() == self.slots.capacity() {
            self.reserve(1)?;
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            entry: Entry::Occupied(value),
        });
        self.live += 1;
        Ok(SlotHandle::new(index, 0))
    }

    /// Shared access to the value behind `handle`, if it is still live.
    pub fn get(&self, handle: SlotHandle) -> Option<&T> {
        let slot = self.slots.get(handle.index as usize)?;
        match &slot.entry {
            Entry::Occupied(value) if slot.generation == handle.generation => Some(value),
            _ => None,
        }
    }

    /// Mutable access to the value behind `handle`, if it is still live.
    pub fn get_mut(&mut self, handle: SlotHandle) -> Option<&mut T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        match &mut slot.entry {
            Entry::Occupied(value) if slot.generation == handle.generation => Some(value),
            _ => None,
        }
    }

    /// Whether `handle` still refers to a live value.
    pub fn contains(&self, handle: SlotHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Remove and return the value behind `handle`.
    ///
    /// Returns `None` for a stale handle. The slot's generation advances, so
    /// every copy of `handle` is invalidated. A slot at the last generation
    /// is retired rather than put back on the free list.
    pub fn remove(&mut self, handle: SlotHandle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation || !matches!(slot.entry, Entry::Occupied(_)) {
            return None;
        }
        let vacated = match slot.generation.checked_add(1) {
            Some(next) => {
                slot.generation = next;
                let vacated = mem::replace(
                    &mut slot.entry,
                    Entry::Vacant {
                        next_free: self.free_head,
                    },
                );
                self.free_head = Some(handle.index);
                vacated
            }
            None => {
                self.retired += 1;
                trace!(index = handle.index, "slot retired");
                mem::replace(&mut slot.entry, Entry::Retired)
            }
        };
        self.live -= 1;
        match vacated {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant { .. } | Entry::Retired => None,
        }
    }

    /// Drop every value and release the slot table's memory.
    ///
    /// Handles issued before the call must not be presented afterwards:
    /// generations restart, so callers that outlive a clear must tell their
    /// handles apart by other means.
    pub fn clear(&mut self) {
        let released = self.live;
        self.slots = Vec::new();
        self.free_head = None;
        self.live = 0;
        self.retired = 0;
        trace!(released, "slot table cleared");
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the arena holds no live values.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of slots the table can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Total slots in the table (live + vacant + retired).
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots retired after exhausting their generations.
    pub fn retired_count(&self) -> usize {
        self.retired
    }

    #[cfg(test)]
    fn set_generation(&mut self, index: u32, generation: u32) {
        if let Some(slot) = self.slots.get_mut(index as usize) {
            slot.generation = generation;
        }
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SlotArena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotArena")
            .field("live", &self.live)
            .field("retired", &self.retired)
            .field("slots", &self.slots.len())
            .field("capacity", &self.slots.capacity())
            .finish()
    }
}

fn alloc_fail<T>(slots: usize) -> ContainerError {
    ContainerError::AllocFail {
        requested_bytes: slots.saturating_mul(mem::size_of::<Slot<T>>()),
    }
}
