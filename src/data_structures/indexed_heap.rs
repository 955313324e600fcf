use std::fmt::Debug;

use crate::{Error, Result};

/// An element held by [`IndexedMinHeap`]
#[derive(Debug, Clone, PartialEq)]
pub struct HeapEntry<P, T> {
    pub vertex: usize,
    pub priority: P,
    pub payload: T,
}

/// A binary min-heap keyed by vertex index with in-place decrease-key
///
/// Besides the heap array, the queue keeps a `vertex -> slot` table so the
/// entry for a vertex can be found in O(1). Every swap performed while sifting
/// updates the table for both elements involved, which is what makes
/// [`IndexedMinHeap::decrease`] O(log n). A vertex is held at most once.
///
/// The children of slot `i` are at `2i + 1` and `2i + 2`.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<P, T>
where
    P: PartialOrd + Copy + Debug,
{
    heap: Vec<HeapEntry<P, T>>,

    /// Slot currently holding each vertex, `None` when absent
    slots: Vec<Option<usize>>,
}

impl<P, T> IndexedMinHeap<P, T>
where
    P: PartialOrd + Copy + Debug,
{
    /// Creates an empty queue able to hold vertices `0..vertex_count`
    pub fn new(vertex_count: usize) -> Self {
        IndexedMinHeap {
            heap: Vec::new(),
            slots: vec![None; vertex_count],
        }
    }

    /// Returns true if the queue holds no element
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued vertices
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if `vertex` is currently queued
    pub fn contains(&self, vertex: usize) -> bool {
        self.slot(vertex).is_some()
    }

    /// Returns the slot holding `vertex`, if queued
    pub fn slot(&self, vertex: usize) -> Option<usize> {
        self.slots.get(vertex).copied().flatten()
    }

    /// Returns the current priority of `vertex`, if queued
    pub fn priority(&self, vertex: usize) -> Option<P> {
        self.slot(vertex).map(|slot| self.heap[slot].priority)
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<&HeapEntry<P, T>> {
        self.heap.first()
    }

    /// Inserts a vertex that is not queued yet
    pub fn push(&mut self, vertex: usize, priority: P, payload: T) -> Result<()> {
        if vertex >= self.slots.len() {
            return Err(Error::InvalidVertex(vertex));
        }
        if self.contains(vertex) {
            return Err(Error::QueueInvariant(format!(
                "vertex {} is already queued, use decrease",
                vertex
            )));
        }

        let index = self.heap.len();
        self.heap.push(HeapEntry {
            vertex,
            priority,
            payload,
        });
        self.slots[vertex] = Some(index);
        self.sift_up(index);
        Ok(())
    }

    /// Removes and returns the element with the smallest priority
    pub fn pop_min(&mut self) -> Option<HeapEntry<P, T>> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.slots[entry.vertex] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(entry)
    }

    /// Lowers the priority of a queued vertex and replaces its payload
    ///
    /// Fails if the vertex is not queued or if `priority` is larger than the
    /// one currently recorded.
    pub fn decrease(&mut self, vertex: usize, priority: P, payload: T) -> Result<()> {
        let slot = self.slot(vertex).ok_or_else(|| {
            Error::QueueInvariant(format!("vertex {} is not queued, use push", vertex))
        })?;

        let entry = &mut self.heap[slot];
        if !(priority <= entry.priority) {
            return Err(Error::QueueInvariant(format!(
                "decrease of vertex {} from {:?} to {:?} would raise its priority",
                vertex, entry.priority, priority
            )));
        }

        entry.priority = priority;
        entry.payload = payload;
        self.sift_up(slot);
        Ok(())
    }

    /// Checks the heap order and that every recorded slot matches its element
    pub fn is_consistent(&self) -> bool {
        let ordered = (1..self.heap.len())
            .all(|i| !(self.heap[i].priority < self.heap[parent(i)].priority));
        let slots_match = self
            .heap
            .iter()
            .enumerate()
            .all(|(i, entry)| self.slots[entry.vertex] == Some(i));
        let queued = self.slots.iter().filter(|slot| slot.is_some()).count();

        ordered && slots_match && queued == self.heap.len()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 && self.heap[index].priority < self.heap[parent(index)].priority {
            self.swap(index, parent(index));
            index = parent(index);
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            if left >= self.heap.len() {
                return;
            }

            let right = left + 1;
            let child = if right < self.heap.len()
                && self.heap[right].priority < self.heap[left].priority
            {
                right
            } else {
                left
            };

            if self.heap[child].priority < self.heap[index].priority {
                self.swap(child, index);
                index = child;
            } else {
                return;
            }
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.slots[self.heap[i].vertex] = Some(i);
        self.slots[self.heap[j].vertex] = Some(j);
    }
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}
