use std::iter::FusedIterator;

use super::Cursor;

/// Lazy pre-order enumeration of the positions reachable from a cursor through
/// [`Cursor::descend`] and [`Cursor::next`].
///
/// Starting from a cursor, yields the cursor itself, then its whole subtree, then each right
/// sibling with its subtree. Ancestors and left siblings are never visited.
pub struct DepthFirst<T> {
    /// Positions still to yield; the next one is on top.
    stack: Vec<Cursor<T>>,
}

impl<T> DepthFirst<T> {
    pub fn new(start: Cursor<T>) -> Self {
        DepthFirst { stack: vec![start] }
    }
}

impl<T> Clone for DepthFirst<T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<T: Clone> Iterator for DepthFirst<T> {
    type Item = Cursor<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.stack.pop()?;
        // The subtree comes before the right siblings, so the first child goes on top
        self.stack.extend(cursor.next());
        self.stack.extend(cursor.descend());
        Some(cursor)
    }
}

impl<T: Clone> FusedIterator for DepthFirst<T> {}

impl<T: Clone> Cursor<T> {
    /// Lazy form of [`Cursor::flatten_depth_first`].
    pub fn iter_depth_first(&self) -> DepthFirst<T> {
        DepthFirst::new(self.clone())
    }

    /// Every position reachable through [`Cursor::descend`] and [`Cursor::next`], as cursors,
    /// in pre-order, starting with `self`.
    ///
    /// ```
    /// use rosezip::{tree, Cursor};
    ///
    /// let all = Cursor::new(tree![1, [2, [3]], [4]]).flatten_depth_first();
    /// let values: Vec<i32> = all.iter().map(|c| *c.value()).collect();
    /// assert_eq!(values, vec![1, 2, 3, 4]);
    /// ```
    pub fn flatten_depth_first(&self) -> Vec<Self> {
        self.iter_depth_first().collect()
    }
}
