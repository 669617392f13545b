//! A directed graph with weighted edges.
//!
//! Each vertex owns the `DirectedEdge` records leaving it, so relaxation can
//! read weights without a separate lookup.

use core::fmt;
use serde::{Deserialize, Serialize};

use super::{check_vertex, RawAdjacency};
use crate::error::GraphError;
use crate::graph::{Directed, Graph, WeightedGraph};

/// A weighted edge `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectedEdge<W = f64> {
    from: usize,
    to: usize,
    weight: W,
}

impl<W> DirectedEdge<W> {
    /// Creates the edge `from -> to` with the given weight.
    pub const fn new(from: usize, to: usize, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// Tail vertex.
    #[inline]
    pub fn from(&self) -> usize {
        self.from
    }

    /// Head vertex.
    #[inline]
    pub fn to(&self) -> usize {
        self.to
    }

    /// Edge weight.
    #[inline]
    pub fn weight(&self) -> &W {
        &self.weight
    }
}

impl<W: fmt::Display> fmt::Display for DirectedEdge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {}", self.from, self.to, self.weight)
    }
}

/// An edge-weighted directed graph over the vertices `0..vertex_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAdjacency<DirectedEdge<W>>")]
pub struct EdgeWeightedDigraph<W = f64> {
    adjacency: Vec<Vec<DirectedEdge<W>>>,
    #[serde(skip)]
    edge_count: usize,
}

impl<W> EdgeWeightedDigraph<W> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        let adjacency = (0..vertex_count).map(|_| Vec::new()).collect();
        Self {
            adjacency,
            edge_count: 0,
        }
    }

    /// Creates a graph from pre-built per-vertex edge lists.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an edge pointing outside the
    /// graph and [`GraphError::MisplacedEdge`] for an edge stored in a list other
    /// than its `from` vertex's.
    pub fn from_adjacency(adjacency: Vec<Vec<DirectedEdge<W>>>) -> Result<Self, GraphError> {
        let vertex_count = adjacency.len();
        for (list, edges) in adjacency.iter().enumerate() {
            for edge in edges {
                if edge.from != list {
                    return Err(GraphError::MisplacedEdge {
                        list,
                        from: edge.from,
                    });
                }
                check_vertex(edge.to, vertex_count)?;
            }
        }
        let edge_count = adjacency.iter().map(Vec::len).sum();
        Ok(Self {
            adjacency,
            edge_count,
        })
    }

    /// Adds the edge `from -> to` with `weight`.
    ///
    /// Does nothing if either endpoint is out of range.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) {
        if let Err(err) = self.try_add_edge(from, to, weight) {
            tracing::debug!(%err, "ignoring weighted edge");
        }
    }

    /// Adds the edge `from -> to` with `weight`, reporting out-of-range endpoints.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `from` or `to` is not a vertex.
    pub fn try_add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<(), GraphError> {
        check_vertex(from, self.vertex_count())?;
        check_vertex(to, self.vertex_count())?;
        self.adjacency[from].push(DirectedEdge::new(from, to, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the head vertices of the edges leaving `v`.
    pub fn adjacents(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacent_edges(v).iter().map(DirectedEdge::to)
    }

    /// Returns the edges leaving `v`, or an empty slice if `v` is out of range.
    pub fn adjacent_edges(&self, v: usize) -> &[DirectedEdge<W>] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates every edge, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge<W>> + '_ {
        self.adjacency.iter().flatten()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<W> Graph for EdgeWeightedDigraph<W> {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacents(vertex)
    }
}

impl<W> Directed for EdgeWeightedDigraph<W> {}

impl<W> WeightedGraph for EdgeWeightedDigraph<W> {
    type Weight = W;

    fn edges_from(&self, vertex: usize) -> &[DirectedEdge<W>] {
        self.adjacent_edges(vertex)
    }
}

impl<W> TryFrom<RawAdjacency<DirectedEdge<W>>> for EdgeWeightedDigraph<W> {
    type Error = GraphError;

    fn try_from(raw: RawAdjacency<DirectedEdge<W>>) -> Result<Self, Self::Error> {
        Self::from_adjacency(raw.adjacency)
    }
}
