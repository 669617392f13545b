//! An undirected adjacency-list graph.
//!
//! Every edge `v-w` is stored twice, once in each endpoint's list, so a
//! self-loop `v-v` appears twice in the list of `v`. The edge count is kept
//! alongside and always equals half the total list length.

use serde::{Deserialize, Serialize};

use super::{check_vertex, RawAdjacency};
use crate::error::GraphError;
use crate::graph::Graph;

/// An undirected graph over the vertices `0..vertex_count`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(1)\) amortized | Appends to both lists |
/// | `adjacents` | \(O(1)\) | Borrows the list |
/// | `from_adjacency` | \(O(n + m \cdot d)\) | Symmetry check scans lists |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAdjacency<usize>")]
pub struct UndirectedGraph {
    adjacency: Vec<Vec<usize>>,
    #[serde(skip)]
    edge_count: usize,
}

impl UndirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph from pre-built adjacency lists.
    ///
    /// The vertex count is the number of lists. Every id must be in range and
    /// every edge must be listed from both ends.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for a dangling id and
    /// [`GraphError::AsymmetricEdge`] when `v` lists `w` a different number of
    /// times than `w` lists `v`.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Result<Self, GraphError> {
        let vertex_count = adjacency.len();
        for nbrs in &adjacency {
            for &w in nbrs {
                check_vertex(w, vertex_count)?;
            }
        }
        for (v, nbrs) in adjacency.iter().enumerate() {
            for &w in nbrs {
                let forward = nbrs.iter().filter(|&&x| x == w).count();
                let backward = adjacency[w].iter().filter(|&&x| x == v).count();
                let symmetric = if v == w {
                    forward % 2 == 0
                } else {
                    forward == backward
                };
                if !symmetric {
                    return Err(GraphError::AsymmetricEdge { v, w });
                }
            }
        }
        let edge_count = adjacency.iter().map(Vec::len).sum::<usize>() / 2;
        Ok(Self {
            adjacency,
            edge_count,
        })
    }

    /// Adds the edge `v-w`.
    ///
    /// Does nothing if either endpoint is out of range.
    pub fn add_edge(&mut self, v: usize, w: usize) {
        if let Err(err) = self.try_add_edge(v, w) {
            tracing::debug!(%err, "ignoring undirected edge");
        }
    }

    /// Adds the edge `v-w`, reporting out-of-range endpoints.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `v` or `w` is not a vertex.
    pub fn try_add_edge(&mut self, v: usize, w: usize) -> Result<(), GraphError> {
        check_vertex(v, self.vertex_count())?;
        check_vertex(w, self.vertex_count())?;
        self.adjacency[v].push(w);
        self.adjacency[w].push(v);
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the neighbors of `v`, or an empty slice if `v` is out of range.
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

    /// Returns the degree of `v` (self-loops count twice), 0 when out of range.
    pub fn degree(&self, v: usize) -> usize {
        self.adjacents(v).len()
    }
}

impl Graph for UndirectedGraph {
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

impl TryFrom<RawAdjacency<usize>> for UndirectedGraph {
    type Error = GraphError;

    fn try_from(raw: RawAdjacency<usize>) -> Result<Self, Self::Error> {
        Self::from_adjacency(raw.adjacency)
    }
}
