//! Predicate search from a [`Cursor`].
//!
//! Both directions follow a "first success wins" rule, tried in a fixed order:
//!
//! *   forward: the focus, then everything reachable through [`Cursor::next`], then everything
//!     reachable through [`Cursor::descend`];
//! *   backward: the focus, then everything reachable through [`Cursor::prev`], then everything
//!     reachable through [`Cursor::ascend`].
//!
//! The searches keep an explicit work list instead of recursing, so tree depth and sibling
//! count do not bound them.

use super::Cursor;

impl<T: Clone> Cursor<T> {
    /// Returns the first cursor, in forward search order, whose value satisfies `predicate`.
    ///
    /// From the root this is a pre-order search of the whole tree.
    pub fn search_forward(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<Self> {
        let mut pending = vec![self.clone()];
        while let Some(cursor) = pending.pop() {
            if predicate(cursor.value()) {
                return Some(cursor);
            }
            // Pushed last, popped first: siblings are exhausted before children.
            pending.extend(cursor.descend());
            pending.extend(cursor.next());
        }
        None
    }

    /// Returns the first cursor, in backward search order, whose value satisfies `predicate`.
    pub fn search_backward(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<Self> {
        // Every left sibling of a level ascends into the same parent position, so each parent
        // level only needs to be searched once. The search never moves down, so the depths it
        // ascends into strictly decrease.
        let mut lowest_ascended: Option<usize> = None;
        let mut pending = vec![self.clone()];
        while let Some(cursor) = pending.pop() {
            if predicate(cursor.value()) {
                return Some(cursor);
            }
            if let Some(parent_depth) = cursor.depth().checked_sub(1) {
                if lowest_ascended.is_none_or(|lowest| parent_depth < lowest) {
                    lowest_ascended = Some(parent_depth);
                    pending.extend(cursor.ascend());
                }
            }
            pending.extend(cursor.prev());
        }
        None
    }

    /// Returns `self` if its value satisfies `predicate`; otherwise searches forward from the
    /// root.
    pub fn search_from_root(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<Self> {
        if predicate(self.value()) {
            return Some(self.clone());
        }
        self.to_root().search_forward(predicate)
    }
}

impl<T: Clone + PartialEq> Cursor<T> {
    /// [`Cursor::search_forward`] for a value equal to `target`.
    pub fn search_forward_equals(&self, target: &T) -> Option<Self> {
        self.search_forward(|value| value == target)
    }

    /// [`Cursor::search_backward`] for a value equal to `target`.
    pub fn search_backward_equals(&self, target: &T) -> Option<Self> {
        self.search_backward(|value| value == target)
    }
}
