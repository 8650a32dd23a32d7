//! The immutable rose tree that cursors walk over.
//!
//! A [`Tree<T>`] is a node value paired with an ordered list of child trees. Trees are
//! reference counted: cloning one is O(1), and a tree rebuilt with a new value or a new
//! child list shares every untouched subtree with the tree it was derived from.
//!
//! The cursor only relies on a small part of this type:
//! *   [`Tree::new`]: build a node from a value and its children.
//! *   [`Tree::value`] and [`Tree::children`]: read a node.
//! *   [`Tree::with_value`] and [`Tree::map_value`]: rewrite the value, keeping the children.
//!
//! The rest ([`Tree::iter_preorder`], [`Tree::debug_draw`], the [`tree!`](crate::tree!)
//! macro, ...) is there for building and inspecting trees.

use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use itertools::Itertools;

use iterato::PreorderIter;

pub mod iterato;

struct Node<T> {
    value: T,
    children: Vec<Tree<T>>,
}

/// A labelled node with an ordered list of child subtrees. A node without children is a leaf.
pub struct Tree<T> {
    node: Arc<Node<T>>,
}

/// Builds a [`Tree`] literal.
///
/// Each child is written in brackets, with its own children nested the same way:
///
/// ```
/// use rosezip::{tree, tree::Tree};
///
/// let t = tree!["a", ["b"], ["c", ["d"], ["e"]], ["f"]];
/// assert_eq!(t.children().len(), 3);
/// assert_eq!(t.to_string(), "(a (b) (c (d) (e)) (f))");
/// assert_eq!(tree!["x"], Tree::leaf("x"));
/// ```
#[macro_export]
macro_rules! tree {
    ($value:expr $(, [$($child:tt)*])* $(,)?) => {
        $crate::tree::Tree::new($value, vec![$($crate::tree![$($child)*]),*])
    };
}

impl<T> Tree<T> {
    pub fn new(value: T, children: Vec<Tree<T>>) -> Self {
        Tree {
            node: Arc::new(Node { value, children }),
        }
    }

    pub fn leaf(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// The value stored at this node.
    pub fn value(&self) -> &T {
        &self.node.value
    }

    /// The ordered children of this node.
    pub fn children(&self) -> &[Tree<T>] {
        &self.node.children
    }

    pub fn is_leaf(&self) -> bool {
        self.node.children.is_empty()
    }

    /// Returns a node carrying `value` and the children of `self`.
    ///
    /// The children are shared with `self`, not copied.
    #[must_use]
    pub fn with_value(&self, value: T) -> Self {
        Self::new(value, self.node.children.clone())
    }

    /// Returns a node whose value is `f` applied to the value of `self`, with the same children.
    #[must_use]
    pub fn map_value(&self, f: impl FnOnce(&T) -> T) -> Self {
        self.with_value(f(self.value()))
    }

    /// Returns `true` if both trees are the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Total number of nodes, this one included.
    pub fn node_count(&self) -> usize {
        self.iter_preorder().count()
    }

    /// Number of nodes on the longest path from this node down to a leaf.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((tree, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(tree.children().iter().map(|c| (c, level + 1)));
        }
        deepest
    }

    /// Returns a pre-order DFS iterator over this subtree, starting with `self`.
    pub fn iter_preorder(&self) -> PreorderIter<'_, T> {
        PreorderIter::new(self)
    }

    /// Draws the subtree as an outline, one node per line.
    ///
    /// ```text
    /// A
    /// ├── B
    /// └── C
    ///     └── D
    /// ```
    pub fn debug_draw(&self, mut node_display: impl FnMut(&T) -> String) -> String {
        self.debug_draw_with_path(|_, value| node_display(value))
    }

    /// Like [`Tree::debug_draw`], but the formatter also receives the index path of each node
    /// relative to `self` (the root has the empty path).
    pub fn debug_draw_with_path(
        &self,
        mut node_display: impl FnMut(&[usize], &T) -> String,
    ) -> String {
        enum Draw<'a, T> {
            Enter {
                tree: &'a Tree<T>,
                index: usize,
                is_last: bool,
            },
            Leave {
                prefix_len: usize,
            },
        }

        fn push_children<'a, T>(pending: &mut Vec<Draw<'a, T>>, tree: &'a Tree<T>) {
            let last = tree.children().len().saturating_sub(1);
            pending.extend(
                tree.children()
                    .iter()
                    .enumerate()
                    .rev()
                    .map(|(index, tree)| Draw::Enter {
                        tree,
                        index,
                        is_last: index == last,
                    }),
            );
        }

        let mut output = String::new();
        let mut path = Vec::new();
        let mut prefix = String::new();
        let _ = writeln!(output, "{}", node_display(&[], self.value()));

        let mut pending = Vec::new();
        push_children(&mut pending, self);
        while let Some(step) = pending.pop() {
            match step {
                Draw::Enter {
                    tree,
                    index,
                    is_last,
                } => {
                    path.push(index);
                    let connector = if is_last { "└── " } else { "├── " };
                    let _ = writeln!(
                        output,
                        "{prefix}{connector}{}",
                        node_display(&path[..], tree.value())
                    );
                    pending.push(Draw::Leave {
                        prefix_len: prefix.len(),
                    });
                    prefix.push_str(if is_last { "    " } else { "│   " });
                    push_children(&mut pending, tree);
                }
                Draw::Leave { prefix_len } => {
                    path.pop();
                    prefix.truncate(prefix_len);
                }
            }
        }
        output
    }

    /// Writes `(value child child ...)`, with `label` rendering each value.
    fn write_sexpr(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &impl Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        // `None` closes the node opened last.
        let mut pending = vec![Some(self)];
        let mut separator = "";
        while let Some(next) = pending.pop() {
            match next {
                Some(tree) => {
                    write!(f, "{separator}(")?;
                    separator = " ";
                    label(tree.value(), f)?;
                    pending.push(None);
                    pending.extend(tree.children().iter().rev().map(Some));
                }
                None => f.write_char(')')?,
            }
        }
        Ok(())
    }
}

impl<T: Clone> Tree<T> {
    /// Returns a node carrying the value of `self` and the given children.
    #[must_use]
    pub fn with_children(&self, children: Vec<Tree<T>>) -> Self {
        Self::new(self.value().clone(), children)
    }
}

impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Tree {
            node: Arc::clone(&self.node),
        }
    }
}

// Tears down uniquely owned subtrees with a work list, so that a very deep tree does not
// recurse once per level on drop.
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let Some(node) = Arc::get_mut(&mut self.node) else {
            return;
        };
        let mut pending = std::mem::take(&mut node.children);
        while let Some(mut tree) = pending.pop() {
            if let Some(node) = Arc::get_mut(&mut tree.node) {
                pending.append(&mut node.children);
            }
        }
    }
}

impl<T> From<T> for Tree<T> {
    fn from(value: T) -> Self {
        Tree::leaf(value)
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.ptr_eq(b) {
                continue;
            }
            if a.value() != b.value() || a.children().len() != b.children().len() {
                return false;
            }
            pending.extend(a.children().iter().zip(b.children()));
        }
        true
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: Hash> Hash for Tree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for node in self.iter_preorder() {
            node.value().hash(state);
            node.children().len().hash(state);
        }
    }
}

/// `(value child ...)` with values in their `Debug` form, e.g. `("a" ("b") ("c"))`.
impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_sexpr(f, &|value, f| write!(f, "{value:?}"))
    }
}

/// `(value child ...)` with values in their `Display` form, e.g. `(a (b) (c))`.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_sexpr(f, &|value, f| write!(f, "{value}"))
    }
}

/// Space-separated `Display` form of a sibling list, as used in cursor debug output.
pub(crate) fn display_forest<'a, T: fmt::Display + 'a>(
    forest: impl IntoIterator<Item = &'a Tree<T>>,
) -> String {
    forest.into_iter().join(" ")
}
