//! An AVL tree. Every node owns its two children outright, and every insert or remove fixes the
//! heights and rebalances each node on the way back up from the changed leaf.
//!
//! The tree is a set: an element equal to one already stored (under the tree's [`Less`]
//! predicate) is discarded on insert.
//!
//! # Examples
//!
//! ```
//! use adt::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! tree.insert(1);
//! assert_eq!(tree.search(&1), Some(&1));
//!
//! // Inserting an equal value is a no-op.
//! tree.insert(1);
//! assert_eq!(tree.len(), 1);
//!
//! // Removing reports whether anything was removed.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```
//!
//! The ordering can be any strict less-than predicate, fixed when the tree is built:
//!
//! ```
//! use adt::avl::Tree;
//!
//! let mut tree = Tree::with_less(|a: &i32, b: &i32| a > b);
//! tree.extend([1, 3, 2]);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use log::trace;

use crate::ordering::{Less, Natural};

/// A self-balancing Binary Search Tree (specifically, an AVL tree) holding distinct values of type
/// `T` ordered by the predicate `L`.
#[derive(Clone)]
pub struct Tree<T, L = Natural> {
    root: Link<T>,
    len: usize,
    less: L,
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree` ordered by `<`.
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
        self.root.release();
    }
}

impl<T, L> Tree<T, L> {
    /// Generate a new, empty `Tree` ordered by the given strict less-than predicate. The
    /// predicate cannot be changed afterwards.
    pub fn with_less(less: L) -> Self {
        Self {
            root: Link(None),
            len: 0,
            less,
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// The number of levels in the tree. An empty tree has height 0 and a single value has
    /// height 1.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Removes every value. Does nothing on an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::avl::Tree;
    ///
    /// let mut tree: Tree<_> = (0..10).collect();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// tree.clear();
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.root.release();
        self.len = 0;
    }

    /// Visits the values in ascending order, yielding each with its depth (the root has depth
    /// 0).
    pub fn traverse(&self) -> Traverse<'_, T> {
        Traverse::new(&self.root, false)
    }

    /// Visits the values in descending order (right subtree, node, left subtree), yielding each
    /// with its depth. This is the order used by the [`Display`](fmt::Display) rendering.
    pub fn traverse_rev(&self) -> Traverse<'_, T> {
        Traverse::new(&self.root, true)
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.traverse(),
            remaining: self.len,
        }
    }
}

impl<T, L: Less<T>> Tree<T, L> {
    /// Inserts `value` unless an equal value is already in the tree, in which case `value` is
    /// dropped. Use [`Tree::contains`] beforehand to tell the two apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 1..=15 {
    ///     tree.insert(x);
    /// }
    ///
    /// // Ascending inserts still give a tree of logarithmic height.
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn insert(&mut self, value: T) {
        if self.root.insert(value, &self.less) {
            self.len += 1;
        }
    }

    /// Finds the stored value equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(4);
    ///
    /// assert_eq!(tree.search(&4), Some(&4));
    /// assert_eq!(tree.search(&10), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<&T> {
        let mut current = self.root.0.as_deref();
        while let Some(node) = current {
            current = match self.less.compare(value, &node.value) {
                Ordering::Less => node.left.0.as_deref(),
                Ordering::Greater => node.right.0.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Whether a value equal to `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Removes the value equal to `value`. Returns whether anything was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(!tree.remove(&5));
    ///
    /// tree.insert(5);
    /// assert!(tree.remove(&5));
    /// assert_eq!(tree.search(&5), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes the value equal to `value` and hands it back.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let removed = self.root.take(value, &self.less)?;
        self.len -= 1;
        Some(removed)
    }

    /// Checks every structural invariant of the tree:
    ///
    /// 1. Every value in a left subtree is less than its ancestor, and every value in a right
    ///    subtree is greater.
    /// 2. Every cached height is one more than the taller child's.
    /// 3. The children of every node differ in height by at most one.
    /// 4. The cached length matches the number of reachable nodes.
    ///
    /// # Panics
    ///
    /// When any of them is violated.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        fn check<'a, T, L: Less<T>>(
            link: &'a Link<T>,
            less: &L,
            lower: Option<&'a T>,
            upper: Option<&'a T>,
        ) -> (usize, usize) {
            let Some(node) = link.0.as_deref() else {
                return (0, 0);
            };
            if let Some(lower) = lower {
                assert!(less.less(lower, &node.value), "value not above its lower bound");
            }
            if let Some(upper) = upper {
                assert!(less.less(&node.value, upper), "value not below its upper bound");
            }

            let (left_height, left_len) = check(&node.left, less, lower, Some(&node.value));
            let (right_height, right_len) = check(&node.right, less, Some(&node.value), upper);
            let height = left_height.max(right_height) + 1;

            assert_eq!(node.height, height, "cached height is stale");
            assert!(left_height.abs_diff(right_height) <= 1, "node is out of balance");

            (height, left_len + right_len + 1)
        }

        let (_, len) = check(&self.root, &self.less, None, None);
        assert_eq!(len, self.len);
    }
}

impl<T: fmt::Debug, L> fmt::Debug for Tree<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Draws the tree sideways: the root at the left margin, the right subtree above it and the left
/// subtree below, three spaces of indentation per level.
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

/// A lazy in-order (or reverse in-order) walk yielding `(depth, value)` pairs. Created by
/// [`Tree::traverse`] and [`Tree::traverse_rev`].
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
        traverse.descend(root, 0);
        traverse
    }

    /// Pushes the path from `link` down its near edge (leftmost, or rightmost when reversed).
    fn descend(&mut self, mut link: &'a Link<T>, mut depth: usize) {
        while let Some(node) = link.0.as_deref() {
            self.stack.push((depth, node));
            link = if self.reverse { &node.right } else { &node.left };
            depth += 1;
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        let far = if self.reverse { &node.left } else { &node.right };
        self.descend(far, depth + 1);
        Some((depth, &node.value))
    }
}

impl<T> FusedIterator for Traverse<'_, T> {}

/// Ascending iterator over the values of a [`Tree`].
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

/// An owning link to an optional subtree.
#[derive(Clone)]
struct Link<T>(Option<Box<Node<T>>>);

impl<T> Default for Link<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Link<T> {
    fn height(&self) -> usize {
        self.0.as_ref().map_or(0, |n| n.height)
    }

    /// Left height minus right height of the subtree root, 0 for an empty subtree.
    fn balance_factor(&self) -> isize {
        self.0.as_ref().map_or(0, |n| n.balance_factor())
    }

    /// Inserts into this subtree, rebalancing on the way back up. Returns whether a node was
    /// added.
    fn insert<L: Less<T>>(&mut self, value: T, less: &L) -> bool {
        let inserted = match &mut self.0 {
            None => {
                self.0 = Some(Node::new_boxed(value));
                return true;
            }
            Some(node) => match less.compare(&value, &node.value) {
                Ordering::Less => node.left.insert(value, less),
                Ordering::Greater => node.right.insert(value, less),
                Ordering::Equal => false,
            },
        };

        // Nothing changed below us if the value was a duplicate.
        if inserted {
            self.balance();
        }
        inserted
    }

    /// Removes the node equal to `value` from this subtree, rebalancing on the way back up.
    fn take<L: Less<T>>(&mut self, value: &T, less: &L) -> Option<T> {
        let node = self.0.as_mut()?;
        let removed = match less.compare(value, &node.value) {
            Ordering::Less => node.left.take(value, less),
            Ordering::Greater => node.right.take(value, less),
            Ordering::Equal => {
                let node = self.0.take()?;
                let (removed, replacement) = node.unlink();
                *self = replacement;
                Some(removed)
            }
        };

        if removed.is_some() {
            self.balance();
        }
        removed
    }

    /// Recomputes the height of the subtree root and restores the AVL condition there with at
    /// most two rotations. Both children must already be balanced.
    ///
    /// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for the four cases.
    fn balance(&mut self) {
        let Some(node) = self.0.as_mut() else {
            return;
        };
        node.fix_height();
        let balance = node.balance_factor();

        if balance > 1 {
            if node.left.balance_factor() < 0 {
                trace!("left-right rotation");
                node.left.rotate_left();
            }
            self.rotate_right();
        } else if balance < -1 {
            if node.right.balance_factor() > 0 {
                trace!("right-left rotation");
                node.right.rotate_right();
            }
            self.rotate_left();
        }

        if cfg!(debug_assertions) {
            let Some(root) = self.0.as_deref() else {
                return;
            };
            let left_height = root.left.height();
            let right_height = root.right.height();
            assert_eq!(root.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically. Does nothing when there is no left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///        old_root               new_root
    ///        /     \                /     \
    ///   new_root    z    ->        x    old_root
    ///    /  \                             /  \
    ///   x    y                           y    z
    /// ```
    fn rotate_right(&mut self) {
        let Some(mut old_root) = self.0.take() else {
            return;
        };
        let Some(mut new_root) = old_root.left.0.take() else {
            self.0 = Some(old_root);
            return;
        };
        trace!("rotating right at height {}", old_root.height);

        old_root.left = mem::take(&mut new_root.right);
        old_root.fix_height();

        new_root.right = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }

    /// Mirror image of [`Link::rotate_right`]: the right child moves up.
    fn rotate_left(&mut self) {
        let Some(mut old_root) = self.0.take() else {
            return;
        };
        let Some(mut new_root) = old_root.right.0.take() else {
            self.0 = Some(old_root);
            return;
        };
        trace!("rotating left at height {}", old_root.height);

        old_root.right = mem::take(&mut new_root.left);
        old_root.fix_height();

        new_root.left = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }

    /// Frees every node of this subtree. Children are detached onto a work list before their
    /// parent is freed, so this never recurses.
    fn release(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.0.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.0.take());
            pending.extend(node.right.0.take());
        }
    }
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: Link(None),
            right: Link(None),
            height: 1,
        })
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = self.left.height().max(self.right.height()) + 1;
    }

    fn balance_factor(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }

    /// Detaches this node's value. Returns it with the subtree that should take this node's
    /// place.
    ///
    /// With two children the node itself stays in place: the in-order successor (the smallest
    /// node of the right subtree) is unlinked and its value overwrites this node's value slot.
    /// The returned subtree still needs [`Link::balance`] at its root.
    fn unlink(mut self: Box<Self>) -> (T, Link<T>) {
        match (self.left.0.take(), self.right.0.take()) {
            (None, None) => (self.value, Link(None)),
            (Some(child), None) | (None, Some(child)) => (self.value, Link(Some(child))),
            (Some(left), Some(right)) => {
                let (successor, rest) = right.take_min();
                let removed = mem::replace(&mut self.value, successor);
                self.left = Link(Some(left));
                self.right = rest;
                (removed, Link(Some(self)))
            }
        }
    }

    /// Unlinks the smallest node of this subtree. Returns its value and the rebalanced
    /// remainder.
    fn take_min(mut self: Box<Self>) -> (T, Link<T>) {
        match self.left.0.take() {
            None => {
                let Node { value, right, .. } = *self;
                (value, right)
            }
            Some(left) => {
                let (min, rest) = left.take_min();
                self.left = rest;
                let mut link = Link(Some(self));
                link.balance();
                (min, link)
            }
        }
    }
}
