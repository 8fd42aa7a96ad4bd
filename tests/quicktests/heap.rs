use adt::heap::{Heap, MaxHeap, MinHeap};
use adt::Error;

use crate::Op;

/// Pops every value, checking the heap order after each pop.
fn drain<T, L: adt::ordering::Less<T>>(heap: &mut Heap<T, L>) -> Vec<T> {
    let mut popped = Vec::with_capacity(heap.len());
    while let Ok(value) = heap.pop_root() {
        heap.check_consistency();
        popped.push(value);
    }
    popped
}

#[quickcheck]
fn min_heap_sorts(xs: Vec<i32>) -> bool {
    let mut heap: MinHeap<_> = xs.iter().copied().collect();
    heap.check_consistency();
    let mut sorted = xs;
    sorted.sort_unstable();

    heap.peek().ok() == sorted.first() && drain(&mut heap) == sorted
}

#[quickcheck]
fn max_heap_sorts_descending(xs: Vec<i32>) -> bool {
    let mut heap: MaxHeap<_> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    drain(&mut heap) == sorted && heap.pop_root() == Err(Error::EmptyHeap)
}

#[quickcheck]
fn interleaved_inserts_and_pops(ops: Vec<Op<i8>>) -> bool {
    let mut heap = Heap::new();
    let mut model: Vec<i8> = Vec::new();

    for op in ops {
        match op {
            Op::Insert(x) => {
                heap.insert(x);
                model.push(x);
            }
            // Any remove pops the root.
            Op::Remove(_) => {
                let least = model.iter().copied().min();
                if let Some(at) = model.iter().position(|&y| Some(y) == least) {
                    model.swap_remove(at);
                }
                if heap.pop_root().ok() != least {
                    return false;
                }
            }
        }
        heap.check_consistency();
    }

    heap.len() == model.len()
}

#[quickcheck]
fn display_has_one_line_per_value(xs: Vec<u8>) -> bool {
    let heap: MaxHeap<_> = xs.into_iter().collect();
    heap.to_string().lines().count() == heap.len() && heap.traverse_rev().count() == heap.len()
}
