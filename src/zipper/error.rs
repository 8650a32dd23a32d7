use thiserror::Error;

use super::nav::Step;

/// Why a cursor could not move.
///
/// The plain navigation methods report failure as `None`; the `try_*` methods and
/// [`Cursor::walk`](super::Cursor::walk) report it with this type instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("no sibling to the right")]
    NoNext,
    #[error("no sibling to the left")]
    NoPrev,
    #[error("already at the root")]
    AtRoot,
    #[error("node has no children")]
    Leaf,
    #[error("cannot address sibling {index} (only {len} siblings)")]
    SiblingOutOfRange { index: usize, len: usize },
    #[error("cannot address child {index} (only {len} children)")]
    ChildOutOfRange { index: usize, len: usize },
    #[error("step {position} ({step:?}) failed")]
    Step {
        position: usize,
        step: Step,
        #[source]
        source: Box<NavError>,
    },
}
