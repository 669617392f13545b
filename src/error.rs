//! Error types shared by the graph representations and the sort strategy parser.

use core::fmt;

/// The error type for rejected graph construction and edge insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An endpoint id is not in `[0, vertex_count)`.
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An undirected adjacency structure lists `v -> w` a different number of
    /// times than `w -> v`.
    AsymmetricEdge {
        /// First endpoint.
        v: usize,
        /// Second endpoint.
        w: usize,
    },
    /// A weighted edge was stored in the list of a vertex other than its `from`.
    MisplacedEdge {
        /// Index of the adjacency list holding the edge.
        list: usize,
        /// The edge's own `from` vertex.
        from: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexOutOfRange {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex {vertex} out of range for graph with {vertex_count} vertices"
            ),
            Self::AsymmetricEdge { v, w } => {
                write!(f, "edge {v}-{w} is not stored symmetrically")
            }
            Self::MisplacedEdge { list, from } => {
                write!(f, "edge from vertex {from} stored in adjacency list {list}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// The error returned when parsing an unknown sort algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortAlgorithmError {
    pub(crate) name: String,
}

impl ParseSortAlgorithmError {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseSortAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort algorithm `{}`", self.name)
    }
}

impl std::error::Error for ParseSortAlgorithmError {}
