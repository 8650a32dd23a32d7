//! Rewriting the tree under a [`Cursor`].
//!
//! Edits only touch the focus and the sibling lists of the current level. Ancestors pick the
//! change up when the cursor ascends through them.

use tracing::trace;

use crate::stack::Stack;
use crate::tree::Tree;

use super::Cursor;

impl<T> Cursor<T> {
    /// Replaces the focused subtree.
    #[must_use]
    pub fn set_node(&self, tree: Tree<T>) -> Self {
        Cursor {
            focus: tree,
            before: self.before.clone(),
            after: self.after.clone(),
            ancestors: self.ancestors.clone(),
        }
    }

    /// Replaces the focused subtree with `f` applied to it.
    #[must_use]
    pub fn modify_node(&self, f: impl FnOnce(&Tree<T>) -> Tree<T>) -> Self {
        self.set_node(f(&self.focus))
    }

    /// Replaces the focused value, keeping its children.
    #[must_use]
    pub fn set_value(&self, value: T) -> Self {
        self.modify_node(|t| t.with_value(value))
    }

    /// Replaces the focused value with `f` applied to it, keeping its children.
    #[must_use]
    pub fn modify_value(&self, f: impl FnOnce(&T) -> T) -> Self {
        self.modify_node(|t| t.map_value(f))
    }

    /// Inserts `tree` as the right neighbour of the focus and focuses it.
    #[must_use]
    pub fn insert_after(&self, tree: Tree<T>) -> Self {
        Cursor {
            focus: tree,
            before: self.before.push(self.focus.clone()),
            after: self.after.clone(),
            ancestors: self.ancestors.clone(),
        }
    }

    /// Inserts `tree` as the left neighbour of the focus and focuses it.
    #[must_use]
    pub fn insert_before(&self, tree: Tree<T>) -> Self {
        Cursor {
            focus: tree,
            before: self.before.clone(),
            after: self.after.push(self.focus.clone()),
            ancestors: self.ancestors.clone(),
        }
    }
}

impl<T: Clone> Cursor<T> {
    /// Inserts `tree` below the focus and focuses it.
    ///
    /// If the focus has children, `tree` becomes the second child (right after the first one).
    /// Otherwise it becomes the only child; the focused node itself is not rewritten until the
    /// cursor ascends back through it.
    #[must_use]
    pub fn insert_child(&self, tree: Tree<T>) -> Self {
        match self.descend() {
            Some(first) => first.insert_after(tree),
            None => Cursor {
                focus: tree,
                before: Stack::new(),
                after: Stack::new(),
                ancestors: self.ancestors.push(self.frame()),
            },
        }
    }

    /// Removes the focused subtree. Never fails.
    ///
    /// The new focus is, in order of preference:
    /// 1. the right neighbour,
    /// 2. the left neighbour,
    /// 3. the parent, which is left without children,
    /// 4. nothing changes: a root without siblings is not deleted, and `self` is returned as is.
    #[must_use]
    pub fn delete(&self) -> Self {
        if let Some((right, after)) = self.after.pop() {
            return Cursor {
                focus: right.clone(),
                before: self.before.clone(),
                after,
                ancestors: self.ancestors.clone(),
            };
        }
        if let Some((left, before)) = self.before.pop() {
            return Cursor {
                focus: left.clone(),
                before,
                after: self.after.clone(),
                ancestors: self.ancestors.clone(),
            };
        }
        match self.ancestors.pop() {
            Some((parent, ancestors)) => {
                trace!(depth = ancestors.len(), "deleted the only child, parent becomes a leaf");
                Cursor {
                    focus: Tree::leaf(parent.focus.value().clone()),
                    before: parent.before.clone(),
                    after: parent.after.clone(),
                    ancestors,
                }
            }
            None => {
                trace!("delete at a root without siblings is a no-op");
                self.clone()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use similar_asserts::assert_eq;

    use crate::tree;
    use crate::zipper::Cursor;

    #[test]
    fn set_and_modify_value_keep_children() {
        let c = Cursor::new(tree![1, [2], [3]]);
        assert_eq!(c.set_value(9).into_tree(), tree![9, [2], [3]]);
        assert_eq!(c.modify_value(|v| v + 1).into_tree(), tree![2, [2], [3]]);
        assert_eq!(c.to_tree(), tree![1, [2], [3]]);
    }

    #[test]
    fn set_and_modify_node() {
        let c = Cursor::new(tree![1, [2], [3]]).descend().unwrap();
        assert_eq!(c.set_node(tree![7, [8]]).into_tree(), tree![1, [7, [8]], [3]]);
        assert_eq!(
            c.modify_node(|t| tree![0, [*t.value()]]).into_tree(),
            tree![1, [0, [2]], [3]]
        );
    }

    #[test]
    fn insert_next_to_focus() {
        let c = Cursor::new(tree![1, [2], [3]]).descend().unwrap();
        let after = c.insert_after(tree![10]);
        assert_eq!(after.value(), &10);
        assert_eq!(after.index(), 1);
        assert_eq!(after.into_tree(), tree![1, [2], [10], [3]]);

        let before = c.insert_before(tree![10]);
        assert_eq!(before.value(), &10);
        assert_eq!(before.index(), 0);
        assert_eq!(before.into_tree(), tree![1, [10], [2], [3]]);
    }

    #[test]
    fn insert_child() {
        let c = Cursor::new(tree![1, [2], [3]]);
        let second = c.insert_child(tree![10]);
        assert_eq!(second.value(), &10);
        assert_eq!(second.path(), vec![1]);
        assert_eq!(second.into_tree(), tree![1, [2], [10], [3]]);

        let leaf = Cursor::new(tree![1]);
        let only = leaf.insert_child(tree![10]);
        assert_eq!(only.depth(), 1);
        assert!(only.is_first() && only.is_last());
        assert_eq!(only.into_tree(), tree![1, [10]]);
    }

    #[test]
    fn insert_child_below_an_inner_leaf() {
        let t = tree![0, [1], [2, [3], [4]]];
        let three = Cursor::new(t.clone()).child_at(1).and_then(|c| c.descend()).unwrap();
        let inserted = three.insert_child(tree![9]);
        assert_eq!(inserted.depth(), 3);
        assert_eq!(inserted.path(), vec![1, 0, 0]);
        // The leaf above is only rebuilt on the way up.
        assert!(inserted.ancestors().next().unwrap().is_leaf());
        assert_eq!(inserted.to_tree(), tree![0, [1], [2, [3, [9]], [4]]]);

        let one = Cursor::new(t.clone()).descend().unwrap();
        assert_eq!(one.insert_child(tree![9]).into_tree(), tree![0, [1, [9]], [2, [3], [4]]]);
        assert_eq!(one.to_tree(), t);
    }

    #[test]
    fn delete_prefers_right_then_left() {
        let c = Cursor::new(tree![0, [1], [2], [3]]).child_at(1).unwrap();
        let right = c.delete();
        assert_eq!(right.value(), &3);
        assert_eq!(right.to_tree(), tree![0, [1], [3]]);

        let left = c.last().delete();
        assert_eq!(left.value(), &2);
        assert_eq!(left.to_tree(), tree![0, [1], [2]]);
    }

    #[test]
    fn delete_only_child_collapses_parent() {
        let c = Cursor::new(tree![0, [1, [2, [3]]], [4]]).descend().unwrap();
        let only = c.descend().unwrap();
        let parent = only.delete();
        assert_eq!(parent.value(), &1);
        assert!(parent.is_leaf());
        assert_eq!(parent.index(), 0);
        assert_eq!(parent.into_tree(), tree![0, [1], [4]]);
    }

    #[test]
    fn delete_root_is_noop() {
        let c = Cursor::new(tree![0, [1]]);
        assert_eq!(c.delete(), c);
    }
}
