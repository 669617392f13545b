//! Collections used directly and as work lists by the graph algorithms.
//!
//! Collections are organized by data structure type:
//! - `linear`: LIFO and FIFO containers
//! - `other`: skip list and Bloom filter

pub mod linear;
pub mod other;

// Re-export commonly used types from submodules
pub use linear::{Queue, Stack};
pub use other::{BloomFilter, SkipList};
