//! The error type shared by the linear collections.

/// An error returned when removing or inspecting an element of an empty linear structure.
///
/// The trees never produce errors. A missing value is reported through `bool` or `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A [`Deque`](crate::deque::Deque) had no element to pop or inspect.
    #[error("deque is empty")]
    EmptyDeque,
    /// A [`Queue`](crate::queue::Queue) had no element to dequeue or inspect.
    #[error("queue is empty")]
    EmptyQueue,
    /// A [`Stack`](crate::stack::Stack) had no element to pop or inspect.
    #[error("stack is empty")]
    EmptyStack,
    /// A [`Heap`](crate::heap::Heap) had no root to pop or inspect.
    #[error("heap is empty")]
    EmptyHeap,
}

/// Result type for the linear structures in this crate.
pub type Result<T> = std::result::Result<T, Error>;
