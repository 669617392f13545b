//! # `dsal` - Classic Data Structures and Algorithms
//!
//! Textbook data structures and algorithms, each a direct transcription of the
//! standard method, operating in memory on small collections.
//!
//! ## Contents
//!
//! - **Containers**: [`Stack`] (LIFO) and [`Queue`] (FIFO), plus the
//!   ordered [`SkipList`] and the probabilistic [`BloomFilter`]
//! - **Sorting**: selection, insertion, shell, quick and merge sort as free
//!   functions over slices, selectable at runtime through [`SortAlgorithm`]
//! - **Graphs**: undirected, directed and edge-weighted directed adjacency
//!   lists behind the [`Graph`](graph::Graph) trait, with depth-first and
//!   breadth-first search, connected components, directed cycle detection and
//!   single-source shortest paths
//! - **Trees**: [`BinaryTree`] with subtree counts, the balanced [`AvlTree`],
//!   [`RedBlackTree`] and [`BTree`], and the hash-committing [`MerkleTree`]
//!
//! ## Conventions
//!
//! Vertices are dense ids `0..vertex_count`. Out-of-range ids never panic:
//! insertions are ignored (the `try_*` variants report [`GraphError`]) and
//! queries answer "nothing" (empty adjacency, unmarked, empty path, infinite
//! distance). Paths are returned destination first: `[v, ..., source]`.
//!
//! Algorithms borrow the graph and allocate fresh per-query state, so any
//! number of independent queries can run over one graph.
//!
//! ## Example
//!
//! ```rust
//! use dsal::graph::{BreadthFirstSearch, EdgeWeightedDigraph, ShortestPath, UndirectedGraph};
//!
//! let mut g = UndirectedGraph::new(4);
//! g.add_edge(0, 1);
//! g.add_edge(1, 2);
//! g.add_edge(0, 3);
//! let tree = BreadthFirstSearch::new(&g).search(0);
//! assert_eq!(tree.path_to(2), vec![2, 1, 0]);
//!
//! let mut w = EdgeWeightedDigraph::new(3);
//! w.add_edge(0, 1, 1.0);
//! w.add_edge(1, 2, 2.0);
//! w.add_edge(0, 2, 5.0);
//! let sp = ShortestPath::new(&w, 0);
//! assert_eq!(sp.distance(2), 3.0);
//! assert_eq!(sp.path_to(2), vec![2, 1, 0]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;
pub mod sort;
pub mod tree;

pub use collections::{BloomFilter, Queue, SkipList, Stack};
pub use error::{GraphError, ParseSortAlgorithmError};
pub use graph::{
    BreadthFirstSearch, ConnectedComponents, CycleFinder, DepthFirstSearch, Digraph,
    DirectedCycle, DirectedEdge, EdgeWeightedDigraph, SearchTree, ShortestPath, UndirectedGraph,
};
pub use sort::{SortAlgorithm, SortStats};
pub use tree::{AvlTree, BTree, BinaryTree, MerkleTree, RedBlackTree, TreeNode};
