//! A directed adjacency-list graph.
//!
//! Edge `v -> w` is stored only in the list of `v`.

use serde::{Deserialize, Serialize};

use super::{check_vertex, RawAdjacency};
use crate::error::GraphError;
use crate::graph::{Directed, Graph};

/// A directed graph over the vertices `0..vertex_count`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(1)\) amortized | Appends to the source list |
/// | `adjacents` | \(O(1)\) | Borrows the list |
/// | `reversed` | \(O(n + m)\) | Builds a new graph |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAdjacency<usize>")]
pub struct Digraph {
    adjacency: Vec<Vec<usize>>,
    #[serde(skip)]
    edge_count: usize,
}

impl Digraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph from pre-built out-neighbor lists.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if a list names a missing vertex.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Result<Self, GraphError> {
        let vertex_count = adjacency.len();
        for nbrs in &adjacency {
            for &w in nbrs {
                check_vertex(w, vertex_count)?;
            }
        }
        let edge_count = adjacency.iter().map(Vec::len).sum();
        Ok(Self {
            adjacency,
            edge_count,
        })
    }

    /// Adds the edge `from -> to`.
    ///
    /// Does nothing if either endpoint is out of range.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        if let Err(err) = self.try_add_edge(from, to) {
            tracing::debug!(%err, "ignoring directed edge");
        }
    }

    /// Adds the edge `from -> to`, reporting out-of-range endpoints.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `from` or `to` is not a vertex.
    pub fn try_add_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        check_vertex(from, self.vertex_count())?;
        check_vertex(to, self.vertex_count())?;
        self.adjacency[from].push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the out-neighbors of `v`, or an empty slice if `v` is out of range.
    pub fn adjacents(&self, v: usize) -> &[usize] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the out-degree of `v`, 0 when out of range.
    pub fn out_degree(&self, v: usize) -> usize {
        self.adjacents(v).len()
    }

    /// Returns a new graph with the direction of every edge flipped.
    ///
    /// Parallel edges survive with their multiplicity. The lists of the result
    /// are ordered by source vertex.
    pub fn reversed(&self) -> Self {
        let mut reversed = Self::new(self.vertex_count());
        for (v, nbrs) in self.adjacency.iter().enumerate() {
            for &w in nbrs {
                reversed.adjacency[w].push(v);
            }
        }
        reversed.edge_count = self.edge_count;
        reversed
    }
}

impl Graph for Digraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacents(vertex).iter().copied()
    }
}

impl Directed for Digraph {}

impl TryFrom<RawAdjacency<usize>> for Digraph {
    type Error = GraphError;

    fn try_from(raw: RawAdjacency<usize>) -> Result<Self, Self::Error> {
        Self::from_adjacency(raw.adjacency)
    }
}
