#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod avl;
mod bst;
mod heap;
mod linear;

/// An operation on an ordered collection, replayed against a std model in the quicktests.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value
    Insert(T),
    /// Remove one value equal to this one
    Remove(T),
}

impl<T: Arbitrary> Arbitrary for Op<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        // Two inserts for every remove keeps the collections from staying empty.
        match g.choose(&[0, 0, 1]) {
            Some(0) => Op::Insert(T::arbitrary(g)),
            _ => Op::Remove(T::arbitrary(g)),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Op::Insert(x) => Box::new(x.shrink().map(Op::Insert)),
            Op::Remove(x) => Box::new(x.shrink().map(Op::Remove)),
        }
    }
}
