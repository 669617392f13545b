//! Basic graph implementations.
//!
//! This module contains the adjacency-list representations every algorithm
//! in `graph` runs on.

pub mod digraph;
pub mod undirected;
pub mod weighted;

pub use digraph::Digraph;
pub use undirected::UndirectedGraph;
pub use weighted::{DirectedEdge, EdgeWeightedDigraph};

use serde::Deserialize;

use crate::error::GraphError;

/// Serialized form shared by the graph types: just the adjacency lists.
///
/// Deserialization goes through this so the lists are re-validated.
#[derive(Deserialize)]
pub(crate) struct RawAdjacency<E> {
    pub(crate) adjacency: Vec<Vec<E>>,
}

#[inline]
pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<(), GraphError> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        })
    }
}
