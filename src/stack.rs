//! A persistent, reference-counted stack (cons list).
//!
//! [`Stack`] is the sequence type behind a cursor's `before` and `after`
//! sibling lists and its ancestor stack. Every operation returns a new stack
//! and leaves the receiver untouched; stacks derived from one another share
//! their common tail, so `push` and `pop` are O(1) and cloning is an `Arc`
//! clone.

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

struct Cell<T> {
    head: T,
    tail: Stack<T>,
    /// Length of the stack whose first cell this is.
    len: usize,
}

/// An immutable singly linked list, addressed from its head.
pub struct Stack<T> {
    top: Option<Arc<Cell<T>>>,
}

impl<T> Stack<T> {
    /// The empty stack.
    pub const fn new() -> Self {
        Stack { top: None }
    }

    pub fn len(&self) -> usize {
        self.top.as_ref().map_or(0, |cell| cell.len)
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Returns a new stack with `value` on top of `self`.
    #[must_use]
    pub fn push(&self, value: T) -> Self {
        Stack {
            top: Some(Arc::new(Cell {
                head: value,
                tail: self.clone(),
                len: self.len() + 1,
            })),
        }
    }

    /// Pushes every element of `items` in turn, so the last one ends up on top.
    #[must_use]
    pub fn push_all<I: IntoIterator<Item = T>>(&self, items: I) -> Self {
        items
            .into_iter()
            .fold(self.clone(), |acc, item| acc.push(item))
    }

    pub fn head(&self) -> Option<&T> {
        self.top.as_ref().map(|cell| &cell.head)
    }

    /// Everything below the head. The tail of the empty stack is empty.
    pub fn tail(&self) -> Self {
        self.top
            .as_ref()
            .map_or_else(Stack::new, |cell| cell.tail.clone())
    }

    /// Splits off the head, returning it together with the remaining stack.
    pub fn pop(&self) -> Option<(&T, Self)> {
        self.top
            .as_ref()
            .map(|cell| (&cell.head, cell.tail.clone()))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }

    /// Returns `true` if both stacks are the same allocation (or both empty).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.top, &other.top) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            top: self.top.clone(),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlinks uniquely owned cells one at a time instead of recursing through the
// nested `Arc`s.
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut next = self.top.take();
        while let Some(cell) = next {
            match Arc::try_unwrap(cell) {
                Ok(mut cell) => next = cell.tail.top.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && (self.ptr_eq(other) || self.iter().zip(other.iter()).all(|(a, b)| a == b))
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Collects so that the first item of the iterator is the head.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Stack::new(), |acc, item| acc.push(item))
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Stack`], head first.
pub struct Iter<'a, T> {
    next: Option<&'a Cell<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { next: self.next }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.next?;
        self.next = cell.tail.top.as_deref();
        Some(&cell.head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.next.map_or(0, |cell| cell.len);
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod test {
    use super::Stack;

    #[test]
    fn push_shares_tail() {
        let base: Stack<i32> = [2, 3].into_iter().collect();
        let a = base.push(1);
        let b = base.push(10);

        assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(b.iter().copied().collect::<Vec<_>>(), vec![10, 2, 3]);
        assert!(a.tail().ptr_eq(&base));
        assert!(b.tail().ptr_eq(&base));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn pop_and_head() {
        let s: Stack<&str> = ["a", "b"].into_iter().collect();
        let (head, rest) = s.pop().unwrap();
        assert_eq!(*head, "a");
        assert_eq!(rest.head(), Some(&"b"));
        assert_eq!(rest.len(), 1);
        assert!(Stack::<u8>::new().pop().is_none());
        assert!(Stack::<u8>::new().tail().is_empty());
    }

    #[test]
    fn push_all_leaves_the_last_item_on_top() {
        let s: Stack<u8> = [3, 2, 1].into_iter().collect();
        let t = Stack::new().push_all([1u8, 2, 3]);
        assert_eq!(t, s);
        assert_eq!(t.iter().len(), 3);
        assert_eq!(s.tail().push_all([4]).iter().copied().collect::<Vec<_>>(), vec![4, 2, 1]);
    }

    #[test]
    fn equality_is_structural() {
        let a: Stack<u8> = [1, 2].into_iter().collect();
        let b = Stack::new().push(2).push(1);
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert_ne!(a, b.tail());
    }

    #[test]
    fn long_stack_drops_without_overflow() {
        let mut s = Stack::new();
        for i in 0..200_000u32 {
            s = s.push(i);
        }
        assert_eq!(s.len(), 200_000);
        drop(s);
    }
}
