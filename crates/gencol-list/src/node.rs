//! List nodes and node references.

use std::fmt;

use gencol_arena::SlotHandle;
use gencol_core::ContainerId;

/// A node in the list's slot arena: one owned element plus links.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) prev: Option<SlotHandle>,
    pub(crate) next: Option<SlotHandle>,
}

impl<T> Node<T> {
    pub(crate) fn new(data: T, prev: Option<SlotHandle>, next: Option<SlotHandle>) -> Self {
        Self { data, prev, next }
    }
}

/// Non-owning reference to one node of a [`RawList`](crate::RawList).
///
/// Cheap to copy and safe to hold across mutations: once the node is
/// removed, or the list is torn down, lookups through the reference return
/// `None` and mutations through it fail with `InvalidArg`. A reference
/// presented to a different list is rejected the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub(crate) owner: ContainerId,
    pub(crate) slot: SlotHandle,
}

impl NodeRef {
    pub(crate) fn new(owner: ContainerId, slot: SlotHandle) -> Self {
        Self { owner, slot }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRef(list={}, {})", self.owner, self.slot)
    }
}
