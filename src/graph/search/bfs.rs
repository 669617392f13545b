//! Breadth-first search.

use crate::collections::Queue;
use crate::graph::{Graph, SearchTree};

/// Breadth-first search over any [`Graph`].
///
/// Vertices are marked when enqueued, so each enters the [`Queue`] once and
/// every tree path is a shortest path by edge count.
#[derive(Debug, Clone, Copy)]
pub struct BreadthFirstSearch<'g, G> {
    graph: &'g G,
}

impl<'g, G: Graph> BreadthFirstSearch<'g, G> {
    /// Prepares searches over `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Searches from `source`.
    ///
    /// An out-of-range source yields a tree with nothing marked.
    pub fn search(&self, source: usize) -> SearchTree {
        let mut tree = SearchTree::new(source, self.graph.vertex_count());
        if !tree.visit(source) {
            return tree;
        }

        let mut queue = Queue::new();
        queue.enqueue(source);

        while let Some(v) = queue.dequeue() {
            for w in self.graph.neighbors(v) {
                if tree.visit(w) {
                    tree.link(w, v);
                    queue.enqueue(w);
                }
            }
        }

        tracing::trace!(source, reached = tree.reached_count(), "breadth-first search done");
        tree
    }
}
