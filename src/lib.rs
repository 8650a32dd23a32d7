//! # Rosezip
//!
//! Rosezip is a persistent zipper over rose trees (ordered trees where every node holds a value
//! and any number of children).
//!
//! A [`Cursor`] focuses one node of a [`Tree`] and can move to its siblings, parent and
//! children, rewrite or delete what it points at, insert new nodes, and search the tree. All of
//! this happens without mutating anything: every operation returns a new cursor, and only the
//! path between the edited node and the root is ever rebuilt. Everything else is shared.
//!
//! ```
//! use rosezip::{tree, Cursor};
//!
//! let t = tree!['A', ['B'], ['C', ['D'], ['E']], ['F']];
//! let d = Cursor::new(t.clone()).search_forward_equals(&'D').unwrap();
//! let edited = d.delete().delete().into_tree();
//!
//! assert_eq!(edited, tree!['A', ['B'], ['C'], ['F']]);
//! assert_eq!(t, tree!['A', ['B'], ['C', ['D'], ['E']], ['F']]);
//! ```

pub mod stack;
pub mod tree;
pub mod zipper;

pub use tree::Tree;
pub use zipper::{Cursor, NavError, Step};
