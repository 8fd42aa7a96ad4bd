//! Ordering predicates for the ordered collections.
//!
//! Every ordered structure in this crate is parameterized by a strict less-than predicate rather
//! than by [`Ord`]. The predicate is fixed when the structure is constructed. Two values are
//! considered equal when neither compares less than the other, which is the strict weak ordering
//! notion of equality and not necessarily [`PartialEq`].
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use adt::ordering::{Less, Natural, Reversed};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed.compare(&1, &2), Ordering::Greater);
//!
//! // Any `Fn(&T, &T) -> bool` works too. Here only the length is compared, so
//! // "ab" and "cd" are equal.
//! let by_len = |a: &&str, b: &&str| a.len() < b.len();
//! assert_eq!(by_len.compare(&"ab", &"cd"), Ordering::Equal);
//! ```

use std::cmp::Ordering;

/// A strict less-than predicate over `T`.
pub trait Less<T: ?Sized> {
    /// Returns `true` when `a` sorts strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Three-way comparison derived from [`Less::less`]: `a < b` is [`Ordering::Less`],
    /// otherwise `b < a` is [`Ordering::Greater`], otherwise the two are [`Ordering::Equal`].
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Ascending order using [`PartialOrd`]. This is the default predicate of every ordered
/// structure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: PartialOrd + ?Sized> Less<T> for Natural {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Descending order using [`PartialOrd`]. A [`Heap`](crate::heap::Heap) using this predicate is a
/// max-heap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed;

impl<T: PartialOrd + ?Sized> Less<T> for Reversed {
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }
}

impl<T, F> Less<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
