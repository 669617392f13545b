//! Probabilistic and multi-level structures.

pub mod bloom_filter;
pub mod skip_list;

pub use bloom_filter::BloomFilter;
pub use skip_list::{CoinFlip, LevelDecider, SkipList};
