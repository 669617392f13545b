//! Graph representations and the classic traversals over them.
//!
//! Graph implementations are organized into categories:
//! - `basic`: adjacency-list representations (undirected, directed, weighted)
//! - `search`: depth-first and breadth-first search trees
//! - `analysis`: connected components, cycle detection, shortest paths
//!
//! Vertices are dense ids in `0..vertex_count()`. Every algorithm borrows the
//! graph immutably and builds its visited/predecessor state fresh per query,
//! so several queries over the same graph never interfere.

pub(crate) mod access;
pub mod analysis;
pub mod basic;
pub mod search;

pub use analysis::{ConnectedComponents, CycleFinder, DirectedCycle, ShortestPath};
pub use basic::{Digraph, DirectedEdge, EdgeWeightedDigraph, UndirectedGraph};
pub use search::{BreadthFirstSearch, DepthFirstSearch, SearchTree};

/// Read access shared by every graph representation.
pub trait Graph {
    /// Number of vertices, fixed at construction.
    fn vertex_count(&self) -> usize;

    /// Number of edges inserted so far.
    fn edge_count(&self) -> usize;

    /// The ids adjacent to `vertex`, in insertion order.
    ///
    /// Yields nothing when `vertex` is out of range.
    fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_;

    /// Returns `true` if `vertex` names a vertex of this graph.
    #[inline]
    fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}

/// Marker for graphs whose edges have a direction.
///
/// Cycle detection is only meaningful over these: in an undirected graph every
/// edge would read as a two-vertex cycle.
pub trait Directed: Graph {}

/// A directed graph whose edges carry weights.
pub trait WeightedGraph: Directed {
    /// Edge weight type.
    type Weight;

    /// The outgoing edge records of `vertex` (empty when out of range).
    fn edges_from(&self, vertex: usize) -> &[DirectedEdge<Self::Weight>];
}
