//! A singly-linked first-in, first-out queue.
//!
//! Values are enqueued at the tail and dequeued from the head. The tail link lets enqueue run
//! in constant time without walking the list.
//!
//! # Examples
//!
//! ```
//! use adt::queue::Queue;
//! use adt::Error;
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//!
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.dequeue(), Ok(2));
//! assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use log::debug;

use crate::error::{Error, Result};

/// A FIFO queue of individually allocated nodes.
pub struct Queue<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

// SAFETY: The queue owns its values and hands out `&T` only through `&self`.
unsafe impl<T: Send> Send for Queue<T> {}
// SAFETY: See above.
unsafe impl<T: Sync> Sync for Queue<T> {}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Queue<T> {
    /// Generate a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// The number of values in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a value at the tail.
    pub fn enqueue(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node { value, next: None })));
        match self.tail {
            // SAFETY: `tail` is the last live node of this queue and `&mut self` means no
            // reference into it exists.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes and returns the value at the head.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyQueue`] when there is nothing to dequeue.
    pub fn dequeue(&mut self) -> Result<T> {
        self.unlink_head().ok_or_else(|| {
            debug!("dequeue on an empty queue");
            Error::EmptyQueue
        })
    }

    /// The value that the next [`Queue::dequeue`] would return.
    pub fn peek(&self) -> Result<&T> {
        // SAFETY: `head` is a live node of this queue, and it can only be freed through
        // `&mut self`, which the returned borrow rules out.
        self.head
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or(Error::EmptyQueue)
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        while self.unlink_head().is_some() {}
    }

    /// Iterates from head to tail, i.e. in dequeue order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            _marker: PhantomData,
        }
    }

    fn unlink_head(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` was leaked in `enqueue` and only this queue points at it (the tail link
        // too, if it is the last node, which is reset below). Reclaiming it here frees it once.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue (size={}):", self.len)?;
        for value in self.iter() {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Head-to-tail iterator over a [`Queue`].
pub struct Iter<'a, T> {
    next: Link<T>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: The queue is borrowed for `'a`, so every node reachable from the head stays
        // alive and unchanged.
        let node = unsafe { &*self.next?.as_ptr() };
        self.next = node.next;
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
