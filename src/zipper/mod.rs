//! A persistent cursor (zipper) over a [`Tree`].
//!
//! A [`Cursor`] points at one subtree (the *focus*) and carries the context needed to rebuild
//! everything around it:
//!
//! *   `before`: the left siblings of the focus, nearest first.
//! *   `after`: the right siblings of the focus, in left-to-right order.
//! *   the ancestor stack, nearest first. Each level records the parent as it was when the cursor
//!     descended, along with the parent's own `before` and `after`.
//!
//! Every operation takes `&self` and returns a new cursor, so earlier cursors stay valid. Edits
//! below an ancestor are not written into that ancestor until the cursor moves up through it
//! ([`Cursor::ascend`]); moving up rebuilds only the parent node, sharing every sibling subtree.
//!
//! ```
//! use rosezip::{tree, Cursor};
//!
//! let t = tree!['A', ['B'], ['C', ['D'], ['E']], ['F']];
//! let c = Cursor::new(t)
//!     .child_at(1)
//!     .and_then(|c| c.descend())
//!     .map(|c| c.set_value('X'))
//!     .unwrap();
//! assert_eq!(c.into_tree(), tree!['A', ['B'], ['C', ['X'], ['E']], ['F']]);
//! ```

use std::fmt;

use crate::stack::Stack;
use crate::tree::{display_forest, Tree};

pub mod edit;
pub mod error;
pub mod nav;
pub mod search;
pub mod traversal;


pub use error::NavError;
pub use nav::Step;
pub use traversal::DepthFirst;

/// One level of the ancestor stack: the parent's node as it was when the cursor descended,
/// and the parent's siblings.
///
/// Only the value of `focus` is used when the level is rebuilt; its children are replaced by the
/// current sibling list of the level below.
pub(crate) struct Frame<T> {
    pub(crate) focus: Tree<T>,
    pub(crate) before: Stack<Tree<T>>,
    pub(crate) after: Stack<Tree<T>>,
}

impl<T> Clone for Frame<T> {
    fn clone(&self) -> Self {
        Frame {
            focus: self.focus.clone(),
            before: self.before.clone(),
            after: self.after.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Frame<T> {
    fn eq(&self, other: &Self) -> bool {
        self.focus == other.focus && self.before == other.before && self.after == other.after
    }
}

impl<T: fmt::Debug> fmt::Debug for Frame<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("focus", &self.focus)
            .field("before", &self.before)
            .field("after", &self.after)
            .finish()
    }
}

/// An immutable position inside a [`Tree`].
pub struct Cursor<T> {
    focus: Tree<T>,
    before: Stack<Tree<T>>,
    after: Stack<Tree<T>>,
    ancestors: Stack<Frame<T>>,
}

impl<T> Cursor<T> {
    /// A cursor focused on the root of `tree`, with no siblings and no ancestors.
    pub fn new(tree: Tree<T>) -> Self {
        Cursor {
            focus: tree,
            before: Stack::new(),
            after: Stack::new(),
            ancestors: Stack::new(),
        }
    }

    pub fn from_tree(tree: Tree<T>) -> Self {
        Self::new(tree)
    }

    /// This level as an ancestor frame for the level below.
    pub(crate) fn frame(&self) -> Frame<T> {
        Frame {
            focus: self.focus.clone(),
            before: self.before.clone(),
            after: self.after.clone(),
        }
    }

    /// The focused subtree.
    pub fn focus(&self) -> &Tree<T> {
        &self.focus
    }

    /// The value at the root of the focused subtree.
    pub fn value(&self) -> &T {
        self.focus.value()
    }

    /// Left siblings of the focus, nearest first.
    pub fn before(&self) -> &Stack<Tree<T>> {
        &self.before
    }

    /// Right siblings of the focus, in left-to-right order.
    pub fn after(&self) -> &Stack<Tree<T>> {
        &self.after
    }

    /// The ancestor levels, nearest first, each as the cursor that descended into this one.
    ///
    /// The focus of a yielded cursor is the ancestor as it was at that time: edits made below
    /// it are only visible after [`Cursor::ascend`].
    pub fn ancestors(&self) -> Ancestors<T> {
        Ancestors {
            rest: self.ancestors.clone(),
        }
    }

    /// The children of the focused subtree.
    pub fn children(&self) -> &[Tree<T>] {
        self.focus.children()
    }

    /// The complete sibling list of this level, focus included, left to right.
    pub fn siblings(&self) -> Vec<Tree<T>> {
        let mut siblings: Vec<Tree<T>> = Vec::with_capacity(self.before.len() + 1 + self.after.len());
        siblings.extend(self.before.iter().cloned());
        siblings.reverse();
        siblings.push(self.focus.clone());
        siblings.extend(self.after.iter().cloned());
        siblings
    }

    /// Number of ancestors above the focus.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Position of the focus among its siblings.
    pub fn index(&self) -> usize {
        self.before.len()
    }

    pub fn is_root(&self) -> bool {
        self.ancestors.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.before.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.after.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.focus.is_leaf()
    }

    /// Values of the ancestors from the outermost down, followed by the focused value.
    pub fn value_path(&self) -> Vec<&T> {
        let mut values: Vec<&T> = self.ancestors.iter().map(|f| f.focus.value()).collect();
        values.reverse();
        values.push(self.value());
        values
    }
}

impl<T: Clone> Cursor<T> {
    /// Moves to the root and returns the tree focused there.
    pub fn into_tree(self) -> Tree<T> {
        self.to_tree()
    }

    pub fn to_tree(&self) -> Tree<T> {
        self.to_root().focus
    }

    /// Draws [`Cursor::to_tree`] as an outline, marking the focused node with `◀`.
    pub fn debug_draw(&self, mut node_display: impl FnMut(&T) -> String) -> String {
        let focus_path = self.path();
        self.to_tree().debug_draw_with_path(|path, value| {
            if path == focus_path.as_slice() {
                format!("{} ◀", node_display(value))
            } else {
                node_display(value)
            }
        })
    }
}

impl<T> From<Tree<T>> for Cursor<T> {
    fn from(tree: Tree<T>) -> Self {
        Cursor::new(tree)
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Cursor {
            focus: self.focus.clone(),
            before: self.before.clone(),
            after: self.after.clone(),
            ancestors: self.ancestors.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.focus == other.focus
            && self.before == other.before
            && self.after == other.after
            && self.ancestors == other.ancestors
    }
}

impl<T: Eq> Eq for Cursor<T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("focus", &self.focus)
            .field("before", &self.before)
            .field("after", &self.after)
            .field("ancestors", &self.ancestors)
            .finish()
    }
}

/// The sibling row of the focus, with the focus in brackets: `(B) [(C (D))] (F)`.
impl<T: fmt::Display> fmt::Display for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let left: Vec<&Tree<T>> = self.before.iter().collect();
        let left = display_forest(left.into_iter().rev());
        let right = display_forest(&self.after);
        if !left.is_empty() {
            write!(f, "{left} ")?;
        }
        write!(f, "[{}]", self.focus)?;
        if !right.is_empty() {
            write!(f, " {right}")?;
        }
        Ok(())
    }
}

/// Iterator over the ancestor levels of a cursor, nearest first.
///
/// Created by [`Cursor::ancestors`].
pub struct Ancestors<T> {
    rest: Stack<Frame<T>>,
}

impl<T> Iterator for Ancestors<T> {
    type Item = Cursor<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (cursor, tail) = {
            let (frame, tail) = self.rest.pop()?;
            let cursor = Cursor {
                focus: frame.focus.clone(),
                before: frame.before.clone(),
                after: frame.after.clone(),
                ancestors: tail.clone(),
            };
            (cursor, tail)
        };
        self.rest = tail;
        Some(cursor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rest.len(), Some(self.rest.len()))
    }
}

impl<T> ExactSizeIterator for Ancestors<T> {}
