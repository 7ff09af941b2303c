//! Borrowing iterator over a [`RawList`](crate::RawList).

use std::iter::FusedIterator;

use gencol_arena::{SlotArena, SlotHandle};

use crate::node::Node;

/// Iterator over `&T`, head to tail. Created by [`RawList::iter`](crate::RawList::iter).
pub struct Iter<'a, T> {
    nodes: &'a SlotArena<Node<T>>,
    front: Option<SlotHandle>,
    back: Option<SlotHandle>,
    /// Elements not yet yielded from either end. The two cursors cross
    /// exactly when this reaches zero.
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(
        nodes: &'a SlotArena<Node<T>>,
        front: Option<SlotHandle>,
        back: Option<SlotHandle>,
        remaining: usize,
    ) -> Self {
        Self {
            nodes,
            front,
            back,
            remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.nodes, self.front, self.back, self.remaining)
    }
}
