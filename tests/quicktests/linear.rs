use adt::deque::Deque;
use adt::queue::Queue;
use adt::stack::Stack;
use adt::Error;

use quickcheck::{Arbitrary, Gen};
use std::collections::VecDeque;

/// An operation on one of the linked linear collections.
#[derive(Copy, Clone, Debug)]
enum End<T> {
    /// Add at the front (deque) or the only insertion end (queue, stack)
    PushFront(T),
    /// Add at the back
    PushBack(T),
    /// Remove from the front
    PopFront,
    /// Remove from the back
    PopBack,
}

impl<T: Arbitrary> Arbitrary for End<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3]) {
            Some(0) => End::PushFront(T::arbitrary(g)),
            Some(1) => End::PushBack(T::arbitrary(g)),
            Some(2) => End::PopFront,
            _ => End::PopBack,
        }
    }
}

#[quickcheck]
fn deque_matches_vecdeque(ops: Vec<End<i32>>) -> bool {
    let mut deque = Deque::new();
    let mut model = VecDeque::new();

    for op in ops {
        let agrees = match op {
            End::PushFront(x) => {
                deque.push_front(x);
                model.push_front(x);
                true
            }
            End::PushBack(x) => {
                deque.push_back(x);
                model.push_back(x);
                true
            }
            End::PopFront => deque.pop_front().ok() == model.pop_front(),
            End::PopBack => deque.pop_back().ok() == model.pop_back(),
        };
        if !agrees || deque.front().ok() != model.front() || deque.back().ok() != model.back() {
            return false;
        }
    }

    deque.len() == model.len()
        && deque.iter().eq(&model)
        && deque.iter().rev().eq(model.iter().rev())
}

#[quickcheck]
fn queue_is_fifo(ops: Vec<End<i32>>) -> bool {
    let mut queue = Queue::new();
    let mut model = VecDeque::new();

    for op in ops {
        let agrees = match op {
            End::PushFront(x) | End::PushBack(x) => {
                queue.enqueue(x);
                model.push_back(x);
                true
            }
            End::PopFront | End::PopBack => match model.pop_front() {
                Some(x) => queue.dequeue() == Ok(x),
                None => queue.dequeue() == Err(Error::EmptyQueue),
            },
        };
        if !agrees || queue.peek().ok() != model.front() {
            return false;
        }
    }

    queue.len() == model.len() && queue.iter().eq(&model)
}

#[quickcheck]
fn stack_is_lifo(ops: Vec<End<i32>>) -> bool {
    let mut stack = Stack::new();
    let mut model = Vec::new();

    for op in ops {
        let agrees = match op {
            End::PushFront(x) | End::PushBack(x) => {
                stack.push(x);
                model.push(x);
                true
            }
            End::PopFront | End::PopBack => match model.pop() {
                Some(x) => stack.pop() == Ok(x),
                None => stack.pop() == Err(Error::EmptyStack),
            },
        };
        if !agrees || stack.peek().ok() != model.last() {
            return false;
        }
    }

    stack.len() == model.len() && stack.iter().eq(model.iter().rev())
}

#[quickcheck]
fn display_lists_every_value(xs: Vec<u16>) -> bool {
    let deque: Deque<_> = xs.iter().copied().collect();
    let queue: Queue<_> = xs.iter().copied().collect();
    let stack: Stack<_> = xs.iter().copied().collect();
    let listed: Vec<_> = xs.iter().map(ToString::to_string).collect();
    let reversed: Vec<_> = listed.iter().rev().cloned().collect();

    let expect = |name: &str, values: &[String]| {
        let mut line = format!("{name} (size={}):", xs.len());
        for value in values {
            line.push(' ');
            line.push_str(value);
        }
        line
    };

    deque.to_string() == expect("Deque", &listed)
        && queue.to_string() == expect("Queue", &listed)
        && stack.to_string() == expect("Stack", &reversed)
}
