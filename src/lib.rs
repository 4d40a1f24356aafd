//! A d-ary min-heap backed by a single growable buffer.

pub mod error;
pub mod heap;

#[cfg(test)]
mod testing;

pub use error::{HeapError, InvalidArgument, Result};
pub use heap::{DHeap, DEFAULT_BRANCHING_FACTOR, DEFAULT_CAPACITY};
