//! Whole-graph analyses built on depth-first traversal and relaxation.

pub mod components;
pub mod cycle;
pub mod shortest_path;

pub use components::ConnectedComponents;
pub use cycle::{CycleFinder, DirectedCycle};
pub use shortest_path::ShortestPath;
