pub mod indexed_heap;
pub mod priority_queue;

pub use indexed_heap::{HeapEntry, IndexedMinHeap};
pub use priority_queue::BinaryHeapWrapper;
