//! A plain, unbalanced Binary Search Tree.
//!
//! Unlike [`avl::Tree`](crate::avl::Tree) this tree keeps equal values: a value comparing equal
//! to a node is stored in that node's left subtree. Nothing rebalances it, so inserting sorted
//! input degrades it to a chain. Every walk over it is therefore iterative.
//!
//! # Examples
//!
//! ```
//! use adt::bst::Tree;
//!
//! let mut tree = Tree::new();
//! tree.extend([5, 3, 7, 3]);
//!
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.search(&3), Some(&3));
//!
//! // One copy goes at a time.
//! assert!(tree.remove(&3));
//! assert!(tree.remove(&3));
//! assert!(!tree.remove(&3));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use crate::ordering::{Less, Natural};

/// An unbalanced Binary Search Tree holding values of type `T`, duplicates included, ordered by
/// the predicate `L`.
pub struct Tree<T, L = Natural> {
    root: Link<T>,
    len: usize,
    less: L,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` ordered by `<`.
    pub fn new() -> Self {
        Self::with_less(Natural)
    }
}

impl<T, L: Default> Default for Tree<T, L> {
    fn default() -> Self {
        Self::with_less(L::default())
    }
}

impl<T, L> Drop for Tree<T, L> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, L> Tree<T, L> {
    /// Generates a new, empty `Tree` ordered by the given strict less-than predicate.
    pub fn with_less(less: L) -> Self {
        Self {
            root: None,
            len: 0,
            less,
        }
    }

    /// The number of values in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.traverse().map(|(depth, _)| depth + 1).max().unwrap_or(0)
    }

    /// Removes every value. Children are detached onto a work list before their parent is
    /// freed, so arbitrarily deep trees are released without recursion.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Visits the values in in-order (left, node, right), yielding each with its depth.
    pub fn traverse(&self) -> Traverse<'_, T> {
        Traverse::new(&self.root, false)
    }

    /// Visits the values in reverse in-order (right, node, left), yielding each with its depth.
    pub fn traverse_rev(&self) -> Traverse<'_, T> {
        Traverse::new(&self.root, true)
    }

    /// Iterates over the values in in-order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.traverse(),
            remaining: self.len,
        }
    }
}

impl<T, L: Less<T>> Tree<T, L> {
    /// Inserts `value`. Values comparing equal to an existing node go to its left.
    pub fn insert(&mut self, value: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if self.less.less(&node.value, &value) {
                &mut node.right
            } else {
                &mut node.left
            };
        }
        *link = Some(Node::new_boxed(value));
        self.len += 1;
    }

    /// Finds the first stored value equal to `value` on the path down from the root.
    pub fn search(&self, value: &T) -> Option<&T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match self.less.compare(value, &node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Whether a value equal to `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Removes one value equal to `value`. Returns whether anything was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes one value equal to `value` and hands it back.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let mut link = &mut self.root;
        loop {
            let ordering = self.less.compare(value, &link.as_ref()?.value);
            match ordering {
                Ordering::Less => link = &mut link.as_mut()?.left,
                Ordering::Greater => link = &mut link.as_mut()?.right,
                Ordering::Equal => break,
            }
        }

        let node = link.take()?;
        let (removed, replacement) = node.unlink();
        *link = replacement;
        self.len -= 1;
        Some(removed)
    }

    /// Checks that an in-order walk is sorted and that the cached length is right.
    ///
    /// # Panics
    ///
    /// When either is violated.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let mut len = 0;
        let mut previous: Option<&T> = None;
        for value in self.iter() {
            if let Some(previous) = previous {
                assert!(!self.less.less(value, previous), "in-order walk is not sorted");
            }
            previous = Some(value);
            len += 1;
        }
        assert_eq!(len, self.len);
    }
}

impl<T: fmt::Debug, L> fmt::Debug for Tree<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Same sideways drawing as [`avl::Tree`](crate::avl::Tree).
impl<T: fmt::Display, L> fmt::Display for Tree<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, value) in self.traverse_rev() {
            writeln!(f, "{:indent$}{}", "", value, indent = depth * 3)?;
        }
        Ok(())
    }
}

impl<T, L: Less<T> + Default> FromIterator<T> for Tree<T, L> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<T, L: Less<T>> Extend<T> for Tree<T, L> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, L> IntoIterator for &'a Tree<T, L> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    /// Detaches this node's value and returns it with the subtree that takes this node's place.
    /// With two children the node stays and takes over its in-order successor's value instead.
    fn unlink(mut self: Box<Self>) -> (T, Link<T>) {
        let left = self.left.take();
        let mut right = self.right.take();
        if left.is_none() {
            return (self.value, right);
        }

        match take_min(&mut right) {
            Some(successor) => {
                let removed = mem::replace(&mut self.value, successor);
                self.left = left;
                self.right = right;
                (removed, Some(self))
            }
            None => (self.value, left),
        }
    }
}

/// Unlinks the leftmost node under `link`, splicing its right child into its place.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let node = link.take()?;
    let Node { value, right, .. } = *node;
    *link = right;
    Some(value)
}

/// A lazy in-order (or reverse in-order) walk yielding `(depth, value)` pairs.
pub struct Traverse<'a, T> {
    stack: Vec<(usize, &'a Node<T>)>,
    reverse: bool,
}

impl<'a, T> Traverse<'a, T> {
    fn new(root: &'a Link<T>, reverse: bool) -> Self {
        let mut traverse = Self {
            stack: Vec::new(),
            reverse,
        };
        traverse.descend(root.as_deref(), 0);
        traverse
    }

    fn descend(&mut self, mut current: Option<&'a Node<T>>, mut depth: usize) {
        while let Some(node) = current {
            self.stack.push((depth, node));
            current = if self.reverse {
                node.right.as_deref()
            } else {
                node.left.as_deref()
            };
            depth += 1;
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        let far = if self.reverse { &node.left } else { &node.right };
        self.descend(far.as_deref(), depth + 1);
        Some((depth, &node.value))
    }
}

impl<T> FusedIterator for Traverse<'_, T> {}

/// In-order iterator over the values of a [`Tree`].
pub struct Iter<'a, T> {
    inner: Traverse<'a, T>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, value) = self.inner.next()?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
