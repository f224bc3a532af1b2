//! Index-keyed collections backing the graph engine and its searches.
//!
//! - [`FreeIndexPool`]: FIFO pool of vacated vertex slots
//! - [`IndexedHeap`]: min-priority queue with membership lookup and in-place
//!   priority updates

pub mod free_pool;
pub mod indexed_heap;

pub use free_pool::FreeIndexPool;
pub use indexed_heap::IndexedHeap;
