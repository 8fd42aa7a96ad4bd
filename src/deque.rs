//! A doubly-linked double-ended queue.
//!
//! # Examples
//!
//! ```
//! use adt::deque::Deque;
//! use adt::Error;
//!
//! let mut deque = Deque::new();
//! deque.push_front(1);
//! deque.push_back(2);
//! deque.push_front(0);
//! assert_eq!(deque.to_string(), "Deque (size=3): 0 1 2");
//!
//! assert_eq!(deque.pop_front(), Ok(0));
//! assert_eq!(deque.pop_back(), Ok(2));
//! assert_eq!(deque.pop_front(), Ok(1));
//! assert_eq!(deque.pop_back(), Err(Error::EmptyDeque));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use log::debug;

use crate::error::{Error, Result};

/// A double-ended queue made of individually allocated, doubly-linked nodes.
pub struct Deque<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    // The deque owns its nodes.
    _marker: PhantomData<Box<Node<T>>>,
}

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    prev: Link<T>,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a node and gives up the `Box`. The node must eventually be reclaimed with
    /// `Box::from_raw`.
    fn leak(value: T, prev: Link<T>, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node { value, prev, next })))
    }
}

// SAFETY: The deque owns its values like a `Vec` does and hands out `&T` only through `&self`.
unsafe impl<T: Send> Send for Deque<T> {}
// SAFETY: See above.
unsafe impl<T: Sync> Sync for Deque<T> {}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Deque<T> {
    /// Generate a new, empty `Deque`.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// The number of values in the deque.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the deque holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends a value at the back.
    pub fn push_back(&mut self, value: T) {
        let node = Node::leak(value, self.tail, None);
        match self.tail {
            // SAFETY: `tail` is a live node owned by this deque and `&mut self` means no
            // reference into it exists.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Prepends a value at the front.
    pub fn push_front(&mut self, value: T) {
        let node = Node::leak(value, None, self.head);
        match self.head {
            // SAFETY: As in `push_back`.
            Some(mut head) => unsafe { head.as_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes and returns the value at the back.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyDeque`] when there is nothing to pop.
    pub fn pop_back(&mut self) -> Result<T> {
        self.unlink_back().ok_or_else(|| {
            debug!("pop_back on an empty deque");
            Error::EmptyDeque
        })
    }

    /// Removes and returns the value at the front.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyDeque`] when there is nothing to pop.
    pub fn pop_front(&mut self) -> Result<T> {
        self.unlink_front().ok_or_else(|| {
            debug!("pop_front on an empty deque");
            Error::EmptyDeque
        })
    }

    /// The value at the front.
    pub fn front(&self) -> Result<&T> {
        // SAFETY: `head` is a live node owned by this deque. The returned borrow is tied to
        // `&self`, and nodes are only freed through `&mut self`.
        self.head
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or(Error::EmptyDeque)
    }

    /// The value at the back.
    pub fn back(&self) -> Result<&T> {
        // SAFETY: As in `front`.
        self.tail
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or(Error::EmptyDeque)
    }

    /// Removes every value, releasing each node exactly once.
    pub fn clear(&mut self) {
        while self.unlink_front().is_some() {}
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    fn unlink_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` came from `Node::leak` and is owned by this deque. After the relinking
        // below nothing points at it, so reclaiming the `Box` frees it exactly once.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        match self.head {
            // SAFETY: The new head is a live node owned by this deque.
            Some(mut new_head) => unsafe { new_head.as_mut().prev = None },
            None => self.tail = None,
        }
        self.len -= 1;
        Some(node.value)
    }

    fn unlink_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: Mirror image of `unlink_front`.
        let node = unsafe { Box::from_raw(tail.as_ptr()) };
        self.tail = node.prev;
        match self.tail {
            // SAFETY: The new tail is a live node owned by this deque.
            Some(mut new_tail) => unsafe { new_tail.as_mut().next = None },
            None => self.head = None,
        }
        self.len -= 1;
        Some(node.value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deque (size={}):", self.len)?;
        for value in self.iter() {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over a [`Deque`]. Also walks back-to-front.
pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: `remaining` says this node has not been yielded from either end, and the deque
        // cannot change while it is borrowed for `'a`.
        let node = unsafe { &*self.head?.as_ptr() };
        self.head = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: As in `next`.
        let node = unsafe { &*self.tail?.as_ptr() };
        self.tail = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
