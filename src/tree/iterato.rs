//! Borrowing iterators over the nodes of a [`Tree`].

use std::iter::FusedIterator;

use super::Tree;

/// A pre-order DFS iterator state.
pub struct PreorderIter<'a, T> {
    /// Nodes still to visit; the next one is on top.
    stack: Vec<&'a Tree<T>>,
}

impl<T> Clone for PreorderIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> PreorderIter<'a, T> {
    /// Create a new pre-order iterator starting at `start`.
    pub fn new(start: &'a Tree<T>) -> Self {
        PreorderIter { stack: vec![start] }
    }
}

impl<'a, T> Iterator for PreorderIter<'a, T> {
    type Item = &'a Tree<T>;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse order, so the first child is processed next
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

impl<T> FusedIterator for PreorderIter<'_, T> {}
