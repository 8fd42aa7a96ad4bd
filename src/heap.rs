//! An array-backed binary heap ordered by a [`Less`] predicate.
//!
//! The root is the value that no other value is "less" than, so [`MinHeap`] keeps the smallest
//! value on top and [`MaxHeap`] the largest. The children of slot `i` live in slots `2i + 1` and
//! `2i + 2`.
//!
//! ```
//! use adt::heap::MaxHeap;
//!
//! let mut heap: MaxHeap<_> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
//! assert_eq!(heap.pop_root(), Ok(8));
//! assert_eq!(heap.pop_root(), Ok(7));
//! assert_eq!(heap.peek(), Ok(&6));
//! ```

use std::fmt;
use std::iter::FusedIterator;

use log::debug;

use crate::error::{Error, Result};
use crate::ordering::{Less, Natural, Reversed};

/// A heap whose root is the least value under `L`.
#[derive(Clone)]
pub struct Heap<T, L = Natural> {
    values: Vec<T>,
    less: L,
}

/// A heap with the smallest value at the root.
pub type MinHeap<T> = Heap<T, Natural>;

/// A heap with the largest value at the root.
pub type MaxHeap<T> = Heap<T, Reversed>;

impl<T> Heap<T> {
    /// Generate a new, empty min-heap.
    pub fn new() -> Self {
        Self::with_less(Natural)
    }
}

impl<T, L: Default> Default for Heap<T, L> {
    fn default() -> Self {
        Self::with_less(L::default())
    }
}

impl<T, L> Heap<T, L> {
    /// Generate a new, empty heap ordered by `less`.
    ///
    /// ```
    /// use adt::heap::Heap;
    ///
    /// // Shortest string on top.
    /// let mut heap = Heap::with_less(|a: &&str, b: &&str| a.len() < b.len());
    /// heap.insert("three");
    /// heap.insert("one");
    /// heap.insert("eleven");
    /// assert_eq!(heap.peek(), Ok(&"one"));
    /// ```
    pub fn with_less(less: L) -> Self {
        Self {
            values: Vec::new(),
            less,
        }
    }

    /// The number of values in the heap.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the heap holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// The root value, without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.values.first().ok_or(Error::EmptyHeap)
    }

    /// Walks the implicit tree right subtree first, yielding each value with its depth. This is
    /// the order used by the [`Display`](fmt::Display) rendering.
    pub fn traverse_rev(&self) -> TraverseRev<'_, T> {
        let mut traverse = TraverseRev {
            values: &self.values,
            stack: Vec::new(),
        };
        traverse.descend(0, 0);
        traverse
    }
}

impl<T, L: Less<T>> Heap<T, L> {
    /// Adds a value and restores the heap order along its path to the root.
    pub fn insert(&mut self, value: T) {
        self.values.push(value);
        self.sift_up(self.values.len() - 1);
    }

    /// Removes and returns the root.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyHeap`] when there is nothing to pop.
    pub fn pop_root(&mut self) -> Result<T> {
        if self.values.is_empty() {
            debug!("pop_root on an empty heap");
            return Err(Error::EmptyHeap);
        }
        let root = self.values.swap_remove(0);
        if !self.values.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less.less(&self.values[index], &self.values[parent]) {
                break;
            }
            self.values.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.values.len();
        loop {
            let mut least = index;
            for child in [2 * index + 1, 2 * index + 2] {
                if child < len && self.less.less(&self.values[child], &self.values[least]) {
                    least = child;
                }
            }
            if least == index {
                break;
            }
            self.values.swap(index, least);
            index = least;
        }
    }

    /// Panics unless no child is less than its parent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        for child in 1..self.values.len() {
            let parent = (child - 1) / 2;
            assert!(
                !self.less.less(&self.values[child], &self.values[parent]),
                "slot {child} is less than its parent at slot {parent}",
            );
        }
    }
}

impl<T: fmt::Debug, L> fmt::Debug for Heap<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.values).finish()
    }
}

/// Draws the implicit tree sideways, the same way the trees in this crate are drawn.
impl<T: fmt::Display, L> fmt::Display for Heap<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, value) in self.traverse_rev() {
            writeln!(f, "{:indent$}{}", "", value, indent = depth * 3)?;
        }
        Ok(())
    }
}

impl<T, L: Less<T> + Default> FromIterator<T> for Heap<T, L> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

impl<T, L: Less<T>> Extend<T> for Heap<T, L> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Reverse in-order walk over the implicit tree of a [`Heap`].
pub struct TraverseRev<'a, T> {
    values: &'a [T],
    stack: Vec<(usize, usize)>,
}

impl<T> TraverseRev<'_, T> {
    /// Pushes `(depth, slot)` for `index` and every right child below it.
    fn descend(&mut self, mut index: usize, mut depth: usize) {
        while index < self.values.len() {
            self.stack.push((depth, index));
            index = 2 * index + 2;
            depth += 1;
        }
    }
}

impl<'a, T> Iterator for TraverseRev<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, index) = self.stack.pop()?;
        self.descend(2 * index + 1, depth + 1);
        Some((depth, &self.values[index]))
    }
}

impl<T> FusedIterator for TraverseRev<'_, T> {}
