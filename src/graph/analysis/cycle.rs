//! Directed cycle detection.
//!
//! A depth-first traversal tracks which vertices are on the current path
//! (`on_stack`). Reaching a vertex that is both marked and on the stack means
//! the edge just followed is a back-edge, and the tree path from its head to
//! its tail plus that edge is a cycle.

use crate::collections::Stack;
use crate::graph::access::{Predecessors, VisitedFlags};
use crate::graph::Directed;

/// A directed cycle, or the absence of one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedCycle {
    vertices: Vec<usize>,
}

impl DirectedCycle {
    /// Returns `true` if a cycle was found.
    pub fn has_cycle(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// The cycle's vertices in edge order, each listed once.
    ///
    /// The edge from the last vertex back to the first closes the cycle. Empty
    /// when there is no cycle; a self-loop gives a single vertex.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Consumes the cycle, returning its vertices.
    pub fn into_vertices(self) -> Vec<usize> {
        self.vertices
    }

    /// Number of edges (equivalently, vertices) on the cycle.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if no cycle was found.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The cycle's edges `(from, to)`, the closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let heads = self.vertices.iter().skip(1).chain(self.vertices.first());
        self.vertices.iter().copied().zip(heads.copied())
    }
}

/// Per-search traversal state.
struct CycleState {
    marked: VisitedFlags,
    on_stack: VisitedFlags,
    prior: Predecessors,
}

impl CycleState {
    fn new(vertex_count: usize) -> Self {
        Self {
            marked: VisitedFlags::new(vertex_count),
            on_stack: VisitedFlags::new(vertex_count),
            prior: Predecessors::new(vertex_count),
        }
    }
}

/// Cycle queries over a directed graph.
///
/// Construction does no work; every query builds its own traversal state.
#[derive(Debug, Clone, Copy)]
pub struct CycleFinder<'g, G> {
    graph: &'g G,
}

impl<'g, G: Directed> CycleFinder<'g, G> {
    /// Prepares cycle queries over `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Looks for a cycle reachable from `start`, stopping at the first one.
    ///
    /// Returns an empty cycle when none is reachable or `start` is out of range.
    pub fn cycle(&self, start: usize) -> DirectedCycle {
        let mut state = CycleState::new(self.graph.vertex_count());
        let vertices = self.search_from(start, &mut state).unwrap_or_default();
        DirectedCycle { vertices }
    }

    /// Returns `true` if a cycle is reachable from `start`.
    pub fn has_cycle_from(&self, start: usize) -> bool {
        self.cycle(start).has_cycle()
    }

    /// Looks for a cycle anywhere in the graph.
    ///
    /// Starts are tried in vertex order; vertices explored from an earlier
    /// start are not explored again, since any cycle through them would
    /// already have been found.
    pub fn find_any(&self) -> DirectedCycle {
        let n = self.graph.vertex_count();
        let mut state = CycleState::new(n);
        for start in 0..n {
            if state.marked.is_visited(start) {
                continue;
            }
            if let Some(vertices) = self.search_from(start, &mut state) {
                return DirectedCycle { vertices };
            }
        }
        DirectedCycle::default()
    }

    fn search_from(&self, start: usize, state: &mut CycleState) -> Option<Vec<usize>> {
        if !state.marked.try_visit(start) {
            return None;
        }
        state.on_stack.mark(start);

        let mut frames = Stack::new();
        frames.push((start, self.graph.neighbors(start)));

        loop {
            let step = match frames.peek_mut() {
                Some((v, nbrs)) => (*v, nbrs.next()),
                None => return None,
            };
            match step {
                (v, Some(w)) => {
                    if state.marked.try_visit(w) {
                        state.prior.set(w, v);
                        state.on_stack.mark(w);
                        frames.push((w, self.graph.neighbors(w)));
                    } else if state.on_stack.is_visited(w) {
                        // Back-edge v -> w: w is an ancestor of v (or v itself).
                        let mut cycle = state.prior.walk(v, w);
                        cycle.reverse();
                        tracing::trace!(start, len = cycle.len(), "directed cycle found");
                        return Some(cycle);
                    }
                }
                (v, None) => {
                    state.on_stack.unmark(v);
                    frames.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Digraph, EdgeWeightedDigraph};

    #[test]
    fn test_triangle() {
        let g = Digraph::from_adjacency(vec![vec![1], vec![2], vec![0]]).unwrap();
        let cycle = CycleFinder::new(&g).cycle(0);
        assert!(cycle.has_cycle());
        assert_eq!(cycle.vertices(), &[0, 1, 2]);
        assert_eq!(cycle.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_cycle_not_through_start() {
        // 0 -> 1 -> 2 -> 3 -> 1
        let g = Digraph::from_adjacency(vec![vec![1], vec![2], vec![3], vec![1]]).unwrap();
        let cycle = CycleFinder::new(&g).cycle(0);
        assert_eq!(cycle.vertices(), &[1, 2, 3]);
    }

    #[test]
    fn test_dag_has_no_cycle() {
        // Diamond: both paths reach 3, which is marked but off the stack.
        let g = Digraph::from_adjacency(vec![vec![1, 2], vec![3], vec![3], vec![]]).unwrap();
        let finder = CycleFinder::new(&g);
        for start in 0..4 {
            let cycle = finder.cycle(start);
            assert!(!cycle.has_cycle());
            assert!(cycle.vertices().is_empty());
        }
        assert!(finder.find_any().is_empty());
    }

    #[test]
    fn test_unreachable_cycle_is_ignored() {
        // 0 -> 1, and 2 <-> 3 off to the side.
        let g = Digraph::from_adjacency(vec![vec![1], vec![], vec![3], vec![2]]).unwrap();
        let finder = CycleFinder::new(&g);
        assert!(!finder.has_cycle_from(0));
        assert!(finder.has_cycle_from(3));
        assert_eq!(finder.find_any().vertices(), &[2, 3]);
    }

    #[test]
    fn test_self_loop() {
        let mut g = Digraph::new(2);
        g.add_edge(0, 1);
        g.add_edge(1, 1);
        let cycle = CycleFinder::new(&g).cycle(0);
        assert_eq!(cycle.into_vertices(), vec![1]);
    }

    #[test]
    fn test_out_of_range_start() {
        let g = Digraph::from_adjacency(vec![vec![0]]).unwrap();
        assert!(!CycleFinder::new(&g).has_cycle_from(5));
    }

    #[test]
    fn test_weighted_graphs_are_directed_too() {
        let mut g = EdgeWeightedDigraph::new(2);
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 0, 1.0);
        assert_eq!(CycleFinder::new(&g).cycle(1).len(), 2);
    }
}
