//! Moving a [`Cursor`] around its tree.
//!
//! The primitive moves return `None` when the target position does not exist. Each has a
//! `try_` counterpart that says why, and [`Cursor::walk`] chains several moves.

use tracing::debug;

use crate::stack::Stack;
use crate::tree::Tree;

use super::{Cursor, NavError};

/// A single navigation move, for use with [`Cursor::walk`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// [`Cursor::next`]
    Next,
    /// [`Cursor::prev`]
    Prev,
    /// [`Cursor::first`]
    First,
    /// [`Cursor::last`]
    Last,
    /// [`Cursor::ascend`]
    Up,
    /// [`Cursor::descend`]
    Down,
    /// [`Cursor::last_child`]
    LastChild,
    /// [`Cursor::to_root`]
    Root,
    /// [`Cursor::sibling_at`]
    Sibling(usize),
    /// [`Cursor::child_at`]
    Child(usize),
}

impl<T: Clone> Cursor<T> {
    /// Moves to the immediate right sibling.
    pub fn next(&self) -> Option<Self> {
        let (right, after) = self.after.pop()?;
        Some(Cursor {
            focus: right.clone(),
            before: self.before.push(self.focus.clone()),
            after,
            ancestors: self.ancestors.clone(),
        })
    }

    /// Moves to the immediate left sibling.
    pub fn prev(&self) -> Option<Self> {
        let (left, before) = self.before.pop()?;
        Some(Cursor {
            focus: left.clone(),
            before,
            after: self.after.push(self.focus.clone()),
            ancestors: self.ancestors.clone(),
        })
    }

    /// Moves to the leftmost sibling. A no-op if already there.
    #[must_use]
    pub fn first(&self) -> Self {
        let mut left: Vec<&Tree<T>> = self.before.iter().collect();
        let Some(leftmost) = left.pop() else {
            return self.clone();
        };
        Cursor {
            focus: leftmost.clone(),
            before: Stack::new(),
            after: self
                .after
                .push(self.focus.clone())
                .push_all(left.into_iter().cloned()),
            ancestors: self.ancestors.clone(),
        }
    }

    /// Moves to the rightmost sibling. A no-op if already there.
    #[must_use]
    pub fn last(&self) -> Self {
        let mut right: Vec<&Tree<T>> = self.after.iter().collect();
        let Some(rightmost) = right.pop() else {
            return self.clone();
        };
        Cursor {
            focus: rightmost.clone(),
            before: self
                .before
                .push(self.focus.clone())
                .push_all(right.into_iter().cloned()),
            after: Stack::new(),
            ancestors: self.ancestors.clone(),
        }
    }

    /// Moves to the parent, rebuilding it from the current sibling list.
    ///
    /// The parent keeps the value it had when the cursor descended; its children become
    /// `before` (reversed), the focus, and `after`. Subtrees are shared, not copied.
    pub fn ascend(&self) -> Option<Self> {
        let (parent, ancestors) = self.ancestors.pop()?;
        Some(Cursor {
            focus: parent.focus.with_children(self.siblings()),
            before: parent.before.clone(),
            after: parent.after.clone(),
            ancestors,
        })
    }

    /// Ascends until there is no parent left.
    #[must_use]
    pub fn to_root(&self) -> Self {
        let mut cursor = self.clone();
        while let Some(parent) = cursor.ascend() {
            cursor = parent;
        }
        cursor
    }

    /// Moves to the first child.
    pub fn descend(&self) -> Option<Self> {
        let (first, rest) = self.focus.children().split_first()?;
        Some(Cursor {
            focus: first.clone(),
            before: Stack::new(),
            after: rest.iter().cloned().collect(),
            ancestors: self.ancestors.push(self.frame()),
        })
    }

    /// Same as [`Cursor::descend`].
    pub fn first_child(&self) -> Option<Self> {
        self.descend()
    }

    pub fn last_child(&self) -> Option<Self> {
        self.descend().map(|c| c.last())
    }

    /// Moves to the sibling at `index` (0-based, counted from the leftmost sibling).
    ///
    /// Fails at the root level, since the root's siblings have no parent to enumerate them,
    /// and when `index` is out of range. The ancestor stack of `self` is carried over as is.
    pub fn sibling_at(&self, index: usize) -> Option<Self> {
        if self.ancestors.is_empty() {
            return None;
        }
        let siblings = self.siblings();
        let focus = siblings.get(index)?.clone();
        Some(Cursor {
            focus,
            before: Stack::new().push_all(siblings[..index].iter().cloned()),
            after: siblings[index + 1..].iter().cloned().collect(),
            ancestors: self.ancestors.clone(),
        })
    }

    /// Moves to the child at `index`.
    pub fn child_at(&self, index: usize) -> Option<Self> {
        self.descend()?.sibling_at(index)
    }

    pub fn try_next(&self) -> Result<Self, NavError> {
        self.next().ok_or(NavError::NoNext)
    }

    pub fn try_prev(&self) -> Result<Self, NavError> {
        self.prev().ok_or(NavError::NoPrev)
    }

    pub fn try_ascend(&self) -> Result<Self, NavError> {
        self.ascend().ok_or(NavError::AtRoot)
    }

    pub fn try_descend(&self) -> Result<Self, NavError> {
        self.descend().ok_or(NavError::Leaf)
    }

    pub fn try_sibling_at(&self, index: usize) -> Result<Self, NavError> {
        if self.is_root() {
            return Err(NavError::AtRoot);
        }
        let len = self.before.len() + 1 + self.after.len();
        self.sibling_at(index)
            .ok_or(NavError::SiblingOutOfRange { index, len })
    }

    pub fn try_child_at(&self, index: usize) -> Result<Self, NavError> {
        let len = self.children().len();
        self.try_descend()?
            .sibling_at(index)
            .ok_or(NavError::ChildOutOfRange { index, len })
    }

    /// Applies a single [`Step`].
    pub fn step(&self, step: Step) -> Result<Self, NavError> {
        match step {
            Step::Next => self.try_next(),
            Step::Prev => self.try_prev(),
            Step::First => Ok(self.first()),
            Step::Last => Ok(self.last()),
            Step::Up => self.try_ascend(),
            Step::Down => self.try_descend(),
            Step::LastChild => self.last_child().ok_or(NavError::Leaf),
            Step::Root => Ok(self.to_root()),
            Step::Sibling(index) => self.try_sibling_at(index),
            Step::Child(index) => self.try_child_at(index),
        }
    }

    /// Applies `steps` in order, stopping at the first one that fails.
    ///
    /// ```
    /// use rosezip::{tree, Cursor, NavError, Step};
    ///
    /// let c = Cursor::new(tree![1, [2], [3, [4]]]);
    /// let d = c.walk([Step::Child(1), Step::Down]).unwrap();
    /// assert_eq!(d.value(), &4);
    ///
    /// let err = c.walk([Step::Down, Step::Down]).unwrap_err();
    /// assert!(matches!(err, NavError::Step { position: 1, .. }));
    /// ```
    pub fn walk(&self, steps: impl IntoIterator<Item = Step>) -> Result<Self, NavError> {
        steps
            .into_iter()
            .enumerate()
            .try_fold(self.clone(), |cursor, (position, step)| {
                cursor.step(step).map_err(|source| {
                    debug!(position, ?step, %source, "cursor walk stopped");
                    NavError::Step {
                        position,
                        step,
                        source: Box::new(source),
                    }
                })
            })
    }

    /// The child indices leading from the root down to the focus.
    ///
    /// The root has the empty path. The position of the root among its own siblings (which
    /// exist only after inserting next to the root) is not part of the path.
    pub fn path(&self) -> Vec<usize> {
        let mut path: Vec<usize> = std::iter::once(self.index())
            .chain(self.ancestors.iter().map(|frame| frame.before.len()))
            .take(self.depth())
            .collect();
        path.reverse();
        path
    }

    /// Focuses the node of `tree` reached by following the child indices in `path`.
    pub fn from_path(tree: Tree<T>, path: &[usize]) -> Result<Self, NavError> {
        Cursor::new(tree).walk(path.iter().map(|&index| Step::Child(index)))
    }
}
