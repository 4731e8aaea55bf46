//! FIFO scratch space for the breadth-first traversals of the [DAG][super::DAG].
use std::collections::VecDeque;

/// A first-in first-out queue.
///
/// The queue does not deduplicate, callers keep their own visited set.
#[derive(Debug, Clone)]
pub struct WorkQueue<T> {
    inner: VecDeque<T>,
}

impl<T> Default for WorkQueue<T> {
    fn default() -> Self {
        WorkQueue::new()
    }
}

impl<T> WorkQueue<T> {
    pub fn new() -> Self {
        WorkQueue { inner: VecDeque::new() }
    }

    /// Appends an element to the tail of the queue.
    pub fn push(&mut self, elt: T) {
        self.inner.push_back(elt);
    }

    /// Removes and returns the element at the head of the queue, or `None` if the queue
    /// is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// The element which `pop_front` would return next.
    pub fn front(&self) -> Option<&T> {
        self.inner.front()
    }

    /// The most recently pushed element.
    pub fn back(&self) -> Option<&T> {
        self.inner.back()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
