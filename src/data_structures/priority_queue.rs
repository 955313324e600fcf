use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// An item stored with its priority; ordering only looks at the priority
#[derive(Debug)]
struct Prioritized<P, T> {
    priority: P,
    item: T,
}

impl<P: Ord, T> PartialEq for Prioritized<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<P: Ord, T> Eq for Prioritized<P, T> {}

impl<P: Ord, T> PartialOrd for Prioritized<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord, T> Ord for Prioritized<P, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// A wrapper around BinaryHeap used as a min-first multi-set
///
/// The same item may be pushed any number of times; nothing is deduplicated
/// and there is no decrease-key. Ties are popped in unspecified order.
#[derive(Debug)]
pub struct BinaryHeapWrapper<T, P>
where
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<Prioritized<P, T>>>,
}

impl<T, P> BinaryHeapWrapper<T, P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item with the given priority into the priority queue
    pub fn push(&mut self, item: T, priority: P) {
        self.heap.push(Reverse(Prioritized { priority, item }));
    }

    /// Removes the item with the smallest priority
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.heap
            .pop()
            .map(|Reverse(Prioritized { priority, item })| (item, priority))
    }

    /// Returns the item with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&T, P)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.item, entry.priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, P> Default for BinaryHeapWrapper<T, P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
