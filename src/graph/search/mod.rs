//! Single-source graph searches.
//!
//! Both searches return a [`SearchTree`]: the set of vertices reached from the
//! source plus the link each one was discovered through. A new tree is built for
//! every `search` call.

mod bfs;
mod dfs;

pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;

use crate::graph::access::{Predecessors, VisitedFlags};

/// The result of a depth-first or breadth-first search from one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTree {
    source: usize,
    marked: VisitedFlags,
    prior: Predecessors,
}

impl SearchTree {
    pub(crate) fn new(source: usize, vertex_count: usize) -> Self {
        Self {
            source,
            marked: VisitedFlags::new(vertex_count),
            prior: Predecessors::new(vertex_count),
        }
    }

    /// The vertex the search started from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns `true` if `v` is reachable from the source.
    ///
    /// Out-of-range ids are never marked.
    pub fn marked(&self, v: usize) -> bool {
        self.marked.is_visited(v)
    }

    /// Number of vertices reached, the source included.
    pub fn reached_count(&self) -> usize {
        self.marked.count()
    }

    /// The vertex `v` was discovered from, `None` for the source and for
    /// unreached vertices.
    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.prior.get(v)
    }

    /// The tree path from `v` back to the source: `[v, ..., source]`.
    ///
    /// Empty when `v` was not reached.
    pub fn path_to(&self, v: usize) -> Vec<usize> {
        if !self.marked(v) {
            return Vec::new();
        }
        self.prior.walk(v, self.source)
    }

    /// Number of edges on [`path_to`](Self::path_to), `None` when unreached.
    pub fn distance_to(&self, v: usize) -> Option<usize> {
        self.marked(v).then(|| self.path_to(v).len() - 1)
    }

    pub(crate) fn visit(&mut self, v: usize) -> bool {
        self.marked.try_visit(v)
    }

    pub(crate) fn link(&mut self, v: usize, prior: usize) {
        self.prior.set(v, prior);
    }
}
