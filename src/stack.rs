//! A singly-linked last-in, first-out stack.
//!
//! ```
//! use adt::stack::Stack;
//!
//! let mut stack: Stack<_> = (1..=3).collect();
//! assert_eq!(stack.to_string(), "Stack (size=3): 3 2 1");
//! assert_eq!(stack.pop(), Ok(3));
//! assert_eq!(stack.peek(), Ok(&2));
//! ```

use std::fmt;
use std::iter::FusedIterator;

use log::debug;

use crate::error::{Error, Result};

/// A LIFO stack. The top is the most recently pushed value.
pub struct Stack<T> {
    top: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    below: Link<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    // The derived drop would recurse once per node.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Stack<T> {
    /// Generate a new, empty `Stack`.
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// The number of values on the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Places a value on top.
    pub fn push(&mut self, value: T) {
        let below = self.top.take();
        self.top = Some(Box::new(Node { value, below }));
        self.len += 1;
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStack`] when there is nothing to pop.
    pub fn pop(&mut self) -> Result<T> {
        match self.top.take() {
            Some(node) => {
                let Node { value, below } = *node;
                self.top = below;
                self.len -= 1;
                Ok(value)
            }
            None => {
                debug!("pop on an empty stack");
                Err(Error::EmptyStack)
            }
        }
    }

    /// The top value, without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.top
            .as_deref()
            .map(|node| &node.value)
            .ok_or(Error::EmptyStack)
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.below.take();
        }
        self.len = 0;
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack (size={}):", self.len)?;
        for value in self.iter() {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every value in order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Top-to-bottom iterator over a [`Stack`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.below.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
