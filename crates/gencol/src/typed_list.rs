use std::fmt;

use gencol_core::{Comparator, ContainerError, StructuralEq};
use gencol_list::{Iter, NodeRef, RawList};

/// Doubly-linked list of `T` bound to the comparator `C`.
///
/// Wraps [`RawList`]; node references returned here are the engine's
/// [`NodeRef`]s and stay valid until their node is removed.
pub struct List<T, C = StructuralEq> {
    raw: RawList<T>,
    cmp: C,
}

impl<T: PartialEq> List<T, StructuralEq> {
    /// Empty list compared by `PartialEq`.
    pub fn new() -> Self {
        Self::with_comparator(StructuralEq)
    }
}

impl<T: PartialEq> Default for List<T, StructuralEq> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> List<T, C> {
    /// Empty list using `cmp` for value lookups.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            raw: RawList::new(),
            cmp,
        }
    }

    /// First node whose element is equivalent to `value`.
    pub fn find(&self, value: &T) -> Option<NodeRef> {
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

    /// Drop every element. See [`RawList::deinit`].
    pub fn deinit(&mut self) -> Result<(), ContainerError> {
        self.raw.deinit()
    }

    /// Append `value`.
    pub fn push_back(&mut self, value: T) -> Result<NodeRef, ContainerError> {
        self.raw.push_back(value)
    }

    /// Prepend `value`.
    pub fn push_front(&mut self, value: T) -> Result<NodeRef, ContainerError> {
        self.raw.push_front(value)
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        self.raw.pop_front()
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        self.raw.pop_back()
    }

    /// Node at position `pos`.
    pub fn at(&self, pos: usize) -> Result<NodeRef, ContainerError> {
        self.raw.at(pos)
    }

    /// Insert after `node`, or at the front for `None`.
    pub fn insert_after(
        &mut self,
        node: Option<NodeRef>,
        value: T,
    ) -> Result<NodeRef, ContainerError> {
        self.raw.insert_after(node, value)
    }

    /// Insert before `node`.
    pub fn insert_before(&mut self, node: NodeRef, value: T) -> Result<NodeRef, ContainerError> {
        self.raw.insert_before(node, value)
    }

    /// Unlink `node` and return its element.
    pub fn remove_node(&mut self, node: NodeRef) -> Result<T, ContainerError> {
        self.raw.remove_node(node)
    }

    /// Insert `value` at position `pos`.
    pub fn insert_at(&mut self, pos: usize, value: T) -> Result<NodeRef, ContainerError> {
        self.raw.insert_at(pos, value)
    }

    /// Element behind `node`.
    pub fn get(&self, node: NodeRef) -> Option<&T> {
        self.raw.get(node)
    }

    /// Mutable element behind `node`.
    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        self.raw.get_mut(node)
    }

    /// Successor of `node`.
    pub fn next(&self, node: NodeRef) -> Option<NodeRef> {
        self.raw.next(node)
    }

    /// Predecessor of `node`.
    pub fn prev(&self, node: NodeRef) -> Option<NodeRef> {
        self.raw.prev(node)
    }

    /// Head node.
    pub fn front(&self) -> Option<NodeRef> {
        self.raw.front()
    }

    /// Tail node.
    pub fn back(&self) -> Option<NodeRef> {
        self.raw.back()
    }

    /// Iterate elements head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        self.raw.iter()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Verify the link structure. See [`RawList::check_links`].
    pub fn check_links(&self) -> Result<(), ContainerError> {
        self.raw.check_links()
    }

    /// The bound comparator.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The underlying engine.
    pub fn as_raw(&self) -> &RawList<T> {
        &self.raw
    }

    /// Unwrap into the engine, dropping the comparator.
    pub fn into_raw(self) -> RawList<T> {
        self.raw
    }
}

impl<'a, T, C> IntoIterator for &'a List<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.raw.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for List<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.raw, f)
    }
}
