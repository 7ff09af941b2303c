//! The forward list engine and its iterator.

use std::fmt;
use std::iter::FusedIterator;

use gencol_arena::{SlotArena, SlotHandle};
use gencol_core::ContainerError;
use tracing::trace;

struct Node<T> {
    data: T,
    next: Option<SlotHandle>,
}

/// Singly-linked list with head and tail links.
///
/// `len == 0` iff `head` and `tail` are both `None`; the tail node has no
/// successor.
pub struct RawForwardList<T> {
    nodes: SlotArena<Node<T>>,
    head: Option<SlotHandle>,
    tail: Option<SlotHandle>,
    len: usize,
}

impl<T> RawForwardList<T> {
    /// Create an empty list. Does not allocate.
    pub const fn new() -> Self {
        Self {
            nodes: SlotArena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Drop every element front to back and release node storage.
    ///
    /// Succeeds on an empty list. The list is empty and reusable afterwards
    /// even on error.
    ///
    /// Returns `Unexpected` if the chain broke before every element was
    /// unlinked; whatever remained is dropped with the node storage.
    pub fn deinit(&mut self) -> Result<(), ContainerError> {
        let released = self.len;
        let outcome = loop {
            match self.pop_front() {
                Ok(_) => {}
                Err(ContainerError::NoData) => break Ok(()),
                Err(e) => break Err(e.into_composite("deinit: pop_front failed")),
            }
        };
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        trace!(released, ok = outcome.is_ok(), "forward list deinitialized");
        outcome
    }

    /// Append `value` at the tail.
    pub fn push_back(&mut self, value: T) -> Result<(), ContainerError> {
        let slot = self.nodes.insert(Node { data: value, next: None })?;
        match self.tail {
            Some(t) => self.node_mut(t)?.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
        Ok(())
    }

    /// Prepend `value` at the head.
    pub fn push_front(&mut self, value: T) -> Result<(), ContainerError> {
        let slot = self.nodes.insert(Node {
            data: value,
            next: self.head,
        })?;
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
        self.head = Some(slot);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the head element. `NoData` if empty.
    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        let head = self.head.ok_or(ContainerError::NoData)?;
        let node = self.nodes.remove(head).ok_or(ContainerError::Unexpected {
            context: "head link does not resolve",
        })?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.data)
    }

    /// First element.
    pub fn front(&self) -> Option<&T> {
        self.nodes.get(self.head?).map(|n| &n.data)
    }

    /// Last element.
    pub fn back(&self) -> Option<&T> {
        self.nodes.get(self.tail?).map(|n| &n.data)
    }

    /// Iterate elements head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node_mut(&mut self, slot: SlotHandle) -> Result<&mut Node<T>, ContainerError> {
        self.nodes.get_mut(slot).ok_or(ContainerError::Unexpected {
            context: "dangling link",
        })
    }
}

impl<T> Default for RawForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a RawForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for RawForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over `&T`, head to tail.
pub struct Iter<'a, T> {
    nodes: &'a SlotArena<Node<T>>,
    cursor: Option<SlotHandle>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
