//! Textbook ordered and linear collections, mostly for educational purposes.
//!
//! ## AVL tree
//!
//! The centerpiece is [`avl::Tree`], a self-balancing binary search tree. Like any Binary Search
//! Tree it keeps, for every node, smaller values in the left subtree and larger values in the
//! right subtree, so lookups take `O(height)`. An AVL tree additionally keeps the heights of the
//! two subtrees of every node within one of each other, rotating nodes after inserts and
//! removals, which bounds the height by `O(lg N)` for `N` stored values.
//!
//! ## Siblings
//!
//! - [`bst::Tree`]: the same ordered set without rebalancing. It keeps duplicates and can
//!   degenerate into a list.
//! - [`heap::Heap`]: an array-backed binary heap, as [`heap::MinHeap`] or [`heap::MaxHeap`].
//! - [`deque::Deque`], [`queue::Queue`] and [`stack::Stack`]: linked linear collections whose
//!   removals report an [`Error`] when empty.
//!
//! ## Ordering
//!
//! The ordered structures take a strict less-than predicate (see [`ordering::Less`]) instead of
//! requiring [`Ord`]. Two values are equal when neither is less than the other.
//!
//! ```
//! use adt::avl::Tree;
//! use adt::ordering::Reversed;
//!
//! let mut tree = Tree::with_less(Reversed);
//! tree.extend([1, 2, 3]);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;
pub mod deque;
pub mod error;
pub mod heap;
pub mod ordering;
pub mod queue;
pub mod stack;

pub use error::{Error, Result};
