//! The doubly-linked list engine.
//!
//! Nodes live in a [`SlotArena`] and link to each other by [`SlotHandle`].
//! The list owns the arena, so dropping the list drops every element, and
//! relinking never moves element data.

use std::fmt;

use gencol_arena::{SlotArena, SlotHandle};
use gencol_core::{Comparator, ContainerError, ContainerId};
use tracing::trace;

use crate::iter::Iter;
use crate::node::{Node, NodeRef};

const STALE_REF: ContainerError = ContainerError::InvalidArg {
    reason: "node reference is stale or belongs to another list",
};

/// Doubly-linked list with head and tail access and stable node references.
///
/// Invariants, checked by [`check_links`](RawList::check_links):
///
/// - `len == 0` iff `head` and `tail` are both `None`;
/// - for adjacent nodes `a -> b`, `a.next == b` iff `b.prev == a`;
/// - `head.prev` and `tail.next` are `None`;
/// - following `next` from `head` visits exactly `len` nodes, ending at
///   `tail`.
pub struct RawList<T> {
    id: ContainerId,
    nodes: SlotArena<Node<T>>,
    head: Option<SlotHandle>,
    tail: Option<SlotHandle>,
    len: usize,
}

impl<T> RawList<T> {
    /// Create an empty list. Does not allocate.
    pub fn new() -> Self {
        Self {
            id: ContainerId::next(),
            nodes: SlotArena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create an empty list with node storage for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        Ok(Self {
            nodes: SlotArena::with_capacity(capacity)?,
            ..Self::new()
        })
    }

    /// Drop every element front to back and release node storage.
    ///
    /// The list is empty and reusable afterwards, even on error. Every
    /// [`NodeRef`] issued before the call is invalidated, including
    /// references to nodes that later reuse the same storage.
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
        self.id = ContainerId::next();
        trace!(released, list = %self.id, ok = outcome.is_ok(), "list deinitialized");
        outcome
    }

    /// Append `value` and return a reference to its node.
    pub fn push_back(&mut self, value: T) -> Result<NodeRef, ContainerError> {
        let old_tail = self.tail;
        let slot = self.nodes.insert(Node::new(value, old_tail, None))?;
        match old_tail {
            Some(t) => self.node_mut(t)?.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
        Ok(self.node_ref(slot))
    }

    /// Prepend `value` and return a reference to its node.
    pub fn push_front(&mut self, value: T) -> Result<NodeRef, ContainerError> {
        let old_head = self.head;
        let slot = self.nodes.insert(Node::new(value, None, old_head))?;
        match old_head {
            Some(h) => self.node_mut(h)?.prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
        Ok(self.node_ref(slot))
    }

    /// Remove and return the first element. `NoData` if empty.
    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        let head = self.head.ok_or(ContainerError::NoData)?;
        let node = self.nodes.remove(head).ok_or(ContainerError::Unexpected {
            context: "head link does not resolve",
        })?;
        match node.next {
            Some(n) => self.node_mut(n)?.prev = None,
            None => self.tail = None,
        }
        self.head = node.next;
        self.len -= 1;
        Ok(node.data)
    }

    /// Remove and return the last element. `NoData` if empty.
    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        let tail = self.tail.ok_or(ContainerError::NoData)?;
        let node = self.nodes.remove(tail).ok_or(ContainerError::Unexpected {
            context: "tail link does not resolve",
        })?;
        match node.prev {
            Some(p) => self.node_mut(p)?.next = None,
            None => self.head = None,
        }
        self.tail = node.prev;
        self.len -= 1;
        Ok(node.data)
    }

    /// Reference to the node at zero-based position `pos`.
    ///
    /// Walks forward from the head. `OutOfBounds` if `pos >= len`.
    pub fn at(&self, pos: usize) -> Result<NodeRef, ContainerError> {
        if pos >= self.len {
            return Err(ContainerError::OutOfBounds { pos, len: self.len });
        }
        let mut cursor = self.head;
        for _ in 0..pos {
            let current = cursor.ok_or(ContainerError::Unexpected {
                context: "list shorter than its length",
            })?;
            cursor = self.node(current)?.next;
        }
        cursor
            .map(|slot| self.node_ref(slot))
            .ok_or(ContainerError::Unexpected {
                context: "list shorter than its length",
            })
    }

    /// First node (from the head) whose element is equivalent to `value`.
    pub fn find<C>(&self, value: &T, cmp: &C) -> Option<NodeRef>
    where
        C: Comparator<T> + ?Sized,
    {
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let node = self.nodes.get(slot)?;
            if cmp.equivalent(&node.data, value) {
                return Some(self.node_ref(slot));
            }
            cursor = node.next;
        }
        None
    }

    /// Whether any element is equivalent to `value` under `cmp`.
    pub fn exists<C>(&self, value: &T, cmp: &C) -> bool
    where
        C: Comparator<T> + ?Sized,
    {
        self.find(value, cmp).is_some()
    }

    /// Insert `value` after `node`, or at the front when `node` is `None`.
    ///
    /// Inserting after the tail appends. `InvalidArg` if `node` is stale or
    /// belongs to another list.
    pub fn insert_after(
        &mut self,
        node: Option<NodeRef>,
        value: T,
    ) -> Result<NodeRef, ContainerError> {
        let Some(node) = node else {
            return self
                .push_front(value)
                .map_err(|e| e.into_composite("insert_after: push_front failed"));
        };
        let slot = self.resolve(node)?;
        if Some(slot) == self.tail {
            return self
                .push_back(value)
                .map_err(|e| e.into_composite("insert_after: push_back failed"));
        }
        let next = self.node(slot)?.next.ok_or(ContainerError::Unexpected {
            context: "non-tail node has no successor",
        })?;
        let new = self.nodes.insert(Node::new(value, Some(slot), Some(next)))?;
        self.node_mut(slot)?.next = Some(new);
        self.node_mut(next)?.prev = Some(new);
        self.len += 1;
        Ok(self.node_ref(new))
    }

    /// Insert `value` before `node`. Inserting before the head prepends.
    ///
    /// `InvalidArg` if `node` is stale or belongs to another list.
    pub fn insert_before(&mut self, node: NodeRef, value: T) -> Result<NodeRef, ContainerError> {
        let slot = self.resolve(node)?;
        let prev = self.node(slot)?.prev.map(|p| self.node_ref(p));
        self.insert_after(prev, value)
            .map_err(|e| e.into_composite("insert_before: insert after predecessor failed"))
    }

    /// Unlink `node` and return its element.
    ///
    /// `InvalidArg` if `node` is stale or belongs to another list. The
    /// reference (and every copy of it) is invalid afterwards.
    pub fn remove_node(&mut self, node: NodeRef) -> Result<T, ContainerError> {
        let slot = self.resolve(node)?;
        if Some(slot) == self.head {
            return self
                .pop_front()
                .map_err(|e| e.into_composite("remove_node: pop_front failed"));
        }
        if Some(slot) == self.tail {
            return self
                .pop_back()
                .map_err(|e| e.into_composite("remove_node: pop_back failed"));
        }
        let removed = self.nodes.remove(slot).ok_or(ContainerError::Unexpected {
            context: "resolved node vanished",
        })?;
        let (Some(prev), Some(next)) = (removed.prev, removed.next) else {
            return Err(ContainerError::Unexpected {
                context: "interior node missing a neighbour",
            });
        };
        self.node_mut(prev)?.next = Some(next);
        self.node_mut(next)?.prev = Some(prev);
        self.len -= 1;
        Ok(removed.data)
    }

    /// Insert `value` so it ends up at position `pos`.
    ///
    /// `pos == len` appends. `OutOfBounds` if `pos > len`.
    pub fn insert_at(&mut self, pos: usize, value: T) -> Result<NodeRef, ContainerError> {
        if pos > self.len {
            return Err(ContainerError::OutOfBounds { pos, len: self.len });
        }
        if pos == self.len {
            return self
                .push_back(value)
                .map_err(|e| e.into_composite("insert_at: push_back failed"));
        }
        let target = self
            .at(pos)
            .map_err(|e| e.into_composite("insert_at: in-range position not found"))?;
        self.insert_before(target, value)
            .map_err(|e| e.into_composite("insert_at: insert_before failed"))
    }

    /// Remove and return the first element equivalent to `value`.
    ///
    /// `NoData` if nothing matches.
    pub fn remove_by_value<C>(&mut self, value: &T, cmp: &C) -> Result<T, ContainerError>
    where
        C: Comparator<T> + ?Sized,
    {
        let node = self.find(value, cmp).ok_or(ContainerError::NoData)?;
        self.remove_node(node)
            .map_err(|e| e.into_composite("remove_by_value: found node not removable"))
    }

    /// Whether `node` refers to a live node of this list.
    pub fn contains(&self, node: NodeRef) -> bool {
        self.resolve(node).is_ok()
    }

    /// Element behind `node`, or `None` if the reference is stale or foreign.
    pub fn get(&self, node: NodeRef) -> Option<&T> {
        let slot = self.resolve(node).ok()?;
        self.nodes.get(slot).map(|n| &n.data)
    }

    /// Mutable element behind `node`, or `None` if stale or foreign.
    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        let slot = self.resolve(node).ok()?;
        self.nodes.get_mut(slot).map(|n| &mut n.data)
    }

    /// Successor of `node`. `None` at the tail or for a stale reference.
    pub fn next(&self, node: NodeRef) -> Option<NodeRef> {
        let slot = self.resolve(node).ok()?;
        self.nodes.get(slot)?.next.map(|s| self.node_ref(s))
    }

    /// Predecessor of `node`. `None` at the head or for a stale reference.
    pub fn prev(&self, node: NodeRef) -> Option<NodeRef> {
        let slot = self.resolve(node).ok()?;
        self.nodes.get(slot)?.prev.map(|s| self.node_ref(s))
    }

    /// Reference to the head node.
    pub fn front(&self) -> Option<NodeRef> {
        self.head.map(|s| self.node_ref(s))
    }

    /// Reference to the tail node.
    pub fn back(&self) -> Option<NodeRef> {
        self.tail.map(|s| self.node_ref(s))
    }

    /// Iterate elements head to tail. Double-ended.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head, self.tail, self.len)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Walk the whole list and verify its link structure.
    ///
    /// Returns `Unexpected` naming the first broken invariant. O(n); meant
    /// for tests and debug assertions.
    pub fn check_links(&self) -> Result<(), ContainerError> {
        if self.head.is_none() != self.tail.is_none() {
            return broken("exactly one of head and tail is set");
        }
        if self.nodes.len() != self.len {
            return broken("node storage count differs from length");
        }
        let mut visited = 0usize;
        let mut prev: Option<SlotHandle> = None;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let node = self.node(slot)?;
            if node.prev != prev {
                return broken("prev link does not mirror next link");
            }
            visited += 1;
            if visited > self.len {
                return broken("forward walk exceeds length");
            }
            prev = Some(slot);
            cursor = node.next;
        }
        if visited != self.len {
            return broken("forward walk shorter than length");
        }
        if prev != self.tail {
            return broken("forward walk does not end at tail");
        }
        Ok(())
    }

    fn node_ref(&self, slot: SlotHandle) -> NodeRef {
        NodeRef::new(self.id, slot)
    }

    fn resolve(&self, node: NodeRef) -> Result<SlotHandle, ContainerError> {
        if node.owner != self.id || !self.nodes.contains(node.slot) {
            return Err(STALE_REF);
        }
        Ok(node.slot)
    }

    fn node(&self, slot: SlotHandle) -> Result<&Node<T>, ContainerError> {
        self.nodes.get(slot).ok_or(ContainerError::Unexpected {
            context: "dangling link",
        })
    }

    fn node_mut(&mut self, slot: SlotHandle) -> Result<&mut Node<T>, ContainerError> {
        self.nodes.get_mut(slot).ok_or(ContainerError::Unexpected {
            context: "dangling link",
        })
    }
}

fn broken(context: &'static str) -> Result<(), ContainerError> {
    Err(ContainerError::Unexpected { context })
}

impl<T> Default for RawList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a RawList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for RawList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gencol_core::{ErrorKind, StructuralEq};

    fn list_of(values: &[i32]) -> RawList<i32> {
        let mut list = RawList::new();
        for v in values {
            list.push_back(*v).unwrap();
        }
        list
    }

    fn contents(list: &RawList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn push_both_ends() {
        let mut list = RawList::new();
        list.push_back(10).unwrap();
        list.push_back(1).unwrap();
        list.push_front(5).unwrap();
        assert_eq!(contents(&list), vec![5, 10, 1]);
        let second = list.at(1).unwrap();
        assert_eq!(list.get(second), Some(&10));
        list.check_links().unwrap();
    }

    #[test]
    fn pops_on_empty_report_no_data() {
        let mut list = RawList::<i32>::new();
        assert_eq!(list.pop_front().unwrap_err().kind(), ErrorKind::NoData);
        assert_eq!(list.pop_back().unwrap_err().kind(), ErrorKind::NoData);
    }

    #[test]
    fn pop_last_element_clears_both_ends() {
        let mut list = list_of(&[7]);
        assert_eq!(list.pop_back().unwrap(), 7);
        assert!(list.front().is_none());
        assert!(list.back().is_none());
        assert!(list.is_empty());
        list.check_links().unwrap();
    }

    #[test]
    fn at_past_end_is_out_of_bounds() {
        let list = list_of(&[1, 2, 3]);
        assert_eq!(
            list.at(3),
            Err(ContainerError::OutOfBounds { pos: 3, len: 3 })
        );
        assert_eq!(list.get(list.at(2).unwrap()), Some(&3));
    }

    #[test]
    fn insert_after_none_prepends() {
        let mut list = list_of(&[2, 3]);
        let node = list.insert_after(None, 1).unwrap();
        assert_eq!(list.front(), Some(node));
        assert_eq!(contents(&list), vec![1, 2, 3]);
    }

    #[test]
    fn insert_after_tail_appends() {
        let mut list = list_of(&[1, 2]);
        let tail = list.back().unwrap();
        let node = list.insert_after(Some(tail), 3).unwrap();
        assert_eq!(list.back(), Some(node));
        assert_eq!(contents(&list), vec![1, 2, 3]);
        list.check_links().unwrap();
    }

    #[test]
    fn insert_after_interior() {
        let mut list = list_of(&[1, 3]);
        let first = list.front().unwrap();
        list.insert_after(Some(first), 2).unwrap();
        assert_eq!(contents(&list), vec![1, 2, 3]);
        list.check_links().unwrap();
    }

    #[test]
    fn insert_before_head_prepends() {
        let mut list = list_of(&[2]);
        let head = list.front().unwrap();
        list.insert_before(head, 1).unwrap();
        assert_eq!(contents(&list), vec![1, 2]);
        list.check_links().unwrap();
    }

    #[test]
    fn insert_at_positions() {
        let mut list = list_of(&[1, 3]);
        list.insert_at(1, 2).unwrap();
        list.insert_at(3, 4).unwrap();
        list.insert_at(0, 0).unwrap();
        assert_eq!(contents(&list), vec![0, 1, 2, 3, 4]);
        assert_eq!(
            list.insert_at(6, 9).unwrap_err().kind(),
            ErrorKind::OutOfBounds
        );
        assert_eq!(list.len(), 5);
        list.check_links().unwrap();
    }

    #[test]
    fn remove_node_head_interior_tail() {
        let mut list = list_of(&[1, 2, 3, 4]);
        let interior = list.at(2).unwrap();
        assert_eq!(list.remove_node(interior).unwrap(), 3);
        let head = list.front().unwrap();
        assert_eq!(list.remove_node(head).unwrap(), 1);
        let tail = list.back().unwrap();
        assert_eq!(list.remove_node(tail).unwrap(), 4);
        assert_eq!(contents(&list), vec![2]);
        list.check_links().unwrap();
    }

    #[test]
    fn removed_node_reference_goes_stale() {
        let mut list = list_of(&[1, 2, 3]);
        let middle = list.at(1).unwrap();
        list.remove_node(middle).unwrap();
        assert!(!list.contains(middle));
        assert_eq!(list.get(middle), None);
        assert_eq!(list.next(middle), None);
        assert_eq!(
            list.remove_node(middle).unwrap_err().kind(),
            ErrorKind::InvalidArg
        );
        assert_eq!(
            list.insert_before(middle, 9).unwrap_err().kind(),
            ErrorKind::InvalidArg
        );

        // The slot gets reused; the old reference must not alias the new node.
        let reused = list.push_back(4).unwrap();
        assert_ne!(reused, middle);
        assert_eq!(list.get(middle), None);
        assert_eq!(contents(&list), vec![1, 3, 4]);
    }

    #[test]
    fn foreign_reference_rejected() {
        let mut a = list_of(&[1]);
        let b = list_of(&[1]);
        let foreign = b.front().unwrap();
        assert_eq!(a.get(foreign), None);
        assert_eq!(
            a.insert_after(Some(foreign), 2).unwrap_err().kind(),
            ErrorKind::InvalidArg
        );
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn deinit_invalidates_references() {
        let mut list = list_of(&[1, 2, 3]);
        let head = list.front().unwrap();
        list.deinit().unwrap();
        assert!(list.is_empty());
        list.check_links().unwrap();

        let fresh = list.push_back(10).unwrap();
        assert_eq!(list.get(head), None);
        assert_eq!(list.get(fresh), Some(&10));
    }

    #[test]
    fn deinit_reports_broken_chain_and_still_empties() {
        let mut list = list_of(&[1, 2, 3]);
        let stale = list.front().unwrap();
        let middle = list.at(1).unwrap();
        list.nodes.remove(middle.slot);

        let err = list.deinit().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(list.is_empty());
        list.check_links().unwrap();
        assert_eq!(list.get(stale), None);

        list.push_back(4).unwrap();
        assert_eq!(contents(&list), vec![4]);
    }

    #[test]
    fn with_capacity_preallocates_nodes() {
        let mut list = RawList::with_capacity(8).unwrap();
        assert!(list.nodes.capacity() >= 8);
        list.push_back(1).unwrap();
        assert_eq!(contents(&list), vec![1]);
    }

    #[test]
    fn find_and_remove_by_value() {
        let mut list = list_of(&[4, 5, 6, 5]);
        let found = list.find(&5, &StructuralEq).unwrap();
        assert_eq!(list.prev(found).and_then(|n| list.get(n)), Some(&4));
        assert!(!list.exists(&7, &StructuralEq));
        assert_eq!(list.remove_by_value(&5, &StructuralEq).unwrap(), 5);
        assert_eq!(contents(&list), vec![4, 6, 5]);
        assert_eq!(
            list.remove_by_value(&7, &StructuralEq).unwrap_err().kind(),
            ErrorKind::NoData
        );
    }

    #[test]
    fn navigation_follows_links() {
        let list = list_of(&[1, 2, 3]);
        let mut forward = Vec::new();
        let mut cursor = list.front();
        while let Some(node) = cursor {
            forward.push(*list.get(node).unwrap());
            cursor = list.next(node);
        }
        assert_eq!(forward, vec![1, 2, 3]);
        assert_eq!(list.prev(list.front().unwrap()), None);
        assert_eq!(list.next(list.back().unwrap()), None);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut list = list_of(&[1, 2]);
        let tail = list.back().unwrap();
        *list.get_mut(tail).unwrap() = 20;
        assert_eq!(contents(&list), vec![1, 20]);
    }

    #[test]
    fn iter_both_directions() {
        let list = list_of(&[1, 2, 3, 4]);
        let backward: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(backward, vec![4, 3, 2, 1]);

        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn debug_lists_elements() {
        let list = list_of(&[1, 2]);
        assert_eq!(format!("{list:?}"), "[1, 2]");
    }
}
