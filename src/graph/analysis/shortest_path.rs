//! Single-source shortest paths by repeated relaxation.
//!
//! This is Dijkstra's method without a priority queue: the next vertex to
//! settle is found by a linear scan over the tentative distances, giving
//! \(O(V^2 + E)\) overall. Weights must be non-negative; the result for
//! negative weights is unspecified.

use num_traits::Float;

use crate::graph::access::{Predecessors, VisitedFlags};
use crate::graph::{DirectedEdge, WeightedGraph};

/// Distances and shortest-path links from one source vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<W = f64> {
    source: usize,
    distance: Vec<W>,
    prior: Predecessors,
}

impl<W: Float> ShortestPath<W> {
    /// Computes shortest paths from `source` over `graph`.
    ///
    /// The source's direct neighbors start at their edge weight and everything
    /// else at infinity. The unprocessed vertex with the smallest finite
    /// distance is then relaxed and marked processed until none remains.
    /// An out-of-range source leaves every vertex unreachable.
    pub fn new<G>(graph: &G, source: usize) -> Self
    where
        G: WeightedGraph<Weight = W>,
    {
        let n = graph.vertex_count();
        let mut sp = Self {
            source,
            distance: vec![W::infinity(); n],
            prior: Predecessors::new(n),
        };
        let mut processed = VisitedFlags::new(n);

        if graph.contains_vertex(source) {
            sp.distance[source] = W::zero();
            processed.mark(source);
            for edge in graph.edges_from(source) {
                sp.relax(edge);
            }
        }

        while let Some(v) = sp.closest_unprocessed(&processed) {
            for edge in graph.edges_from(v) {
                sp.relax(edge);
            }
            processed.mark(v);
        }

        tracing::debug!(
            source,
            vertices = n,
            settled = processed.count(),
            "shortest paths computed"
        );
        sp
    }

    /// The source vertex.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Length of the shortest path to `v`; infinity when unreachable or out of range.
    pub fn distance(&self, v: usize) -> W {
        self.distance.get(v).copied().unwrap_or_else(W::infinity)
    }

    /// Returns `true` if `v` is reachable from the source.
    pub fn has_path_to(&self, v: usize) -> bool {
        self.distance(v).is_finite()
    }

    /// The shortest path from `v` back to the source: `[v, ..., source]`.
    ///
    /// Empty when `v` is unreachable. The walk also stops at any vertex
    /// without a recorded predecessor.
    pub fn path_to(&self, v: usize) -> Vec<usize> {
        if !self.has_path_to(v) {
            return Vec::new();
        }
        self.prior.walk(v, self.source)
    }

    /// Updates the head of `edge` if going through its tail is shorter.
    ///
    /// Edges with an endpoint outside the graph are skipped.
    fn relax(&mut self, edge: &DirectedEdge<W>) {
        let (v, w) = (edge.from(), edge.to());
        let (Some(&from), Some(&to)) = (self.distance.get(v), self.distance.get(w)) else {
            tracing::debug!(from = v, to = w, "skipping edge outside the graph");
            return;
        };
        let through = from + *edge.weight();
        if through < to {
            self.distance[w] = through;
            self.prior.set(w, v);
        }
    }

    fn closest_unprocessed(&self, processed: &VisitedFlags) -> Option<usize> {
        let mut closest = None;
        let mut best = W::infinity();
        for (v, &d) in self.distance.iter().enumerate() {
            if d < best && !processed.is_visited(v) {
                closest = Some(v);
                best = d;
            }
        }
        closest
    }
}
