//! Depth-first search.

use crate::collections::Stack;
use crate::graph::{Graph, SearchTree};

/// Depth-first search over any [`Graph`].
///
/// The traversal follows the recursive formulation (enter a neighbor as soon as
/// it is discovered, resume the parent once it is exhausted) but keeps its
/// frames on an explicit [`Stack`], so path length is not bounded by the
/// thread's call stack.
#[derive(Debug, Clone, Copy)]
pub struct DepthFirstSearch<'g, G> {
    graph: &'g G,
}

impl<'g, G: Graph> DepthFirstSearch<'g, G> {
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

        let mut frames = Stack::new();
        frames.push((source, self.graph.neighbors(source)));

        loop {
            let step = match frames.peek_mut() {
                Some((v, nbrs)) => (*v, nbrs.next()),
                None => break,
            };
            match step {
                (v, Some(w)) => {
                    if tree.visit(w) {
                        tree.link(w, v);
                        frames.push((w, self.graph.neighbors(w)));
                    }
                }
                (_, None) => {
                    frames.pop();
                }
            }
        }

        tracing::trace!(source, reached = tree.reached_count(), "depth-first search done");
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Digraph, UndirectedGraph};

    fn sample() -> UndirectedGraph {
        // 0-1, 0-2, 1-3, 2-3, 3-4 ; 5 isolated
        let mut g = UndirectedGraph::new(6);
        for (v, w) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)] {
            g.add_edge(v, w);
        }
        g
    }

    #[test]
    fn test_follows_first_neighbor_deeply() {
        let g = sample();
        let tree = DepthFirstSearch::new(&g).search(0);

        // 0 -> 1 -> 3 -> 2 and 3 -> 4, like the recursive version.
        assert_eq!(tree.path_to(2), vec![2, 3, 1, 0]);
        assert_eq!(tree.path_to(4), vec![4, 3, 1, 0]);
        assert_eq!(tree.path_to(0), vec![0]);
        assert_eq!(tree.predecessor(0), None);
        assert_eq!(tree.reached_count(), 5);
    }

    #[test]
    fn test_unreachable_and_out_of_range() {
        let g = sample();
        let tree = DepthFirstSearch::new(&g).search(0);
        assert!(!tree.marked(5));
        assert!(tree.path_to(5).is_empty());
        assert!(!tree.marked(100));
        assert!(tree.path_to(100).is_empty());
        assert_eq!(tree.distance_to(5), None);

        let nowhere = DepthFirstSearch::new(&g).search(42);
        assert_eq!(nowhere.reached_count(), 0);
        assert!(nowhere.path_to(42).is_empty());
    }

    #[test]
    fn test_respects_direction() {
        let mut g = Digraph::new(3);
        g.add_edge(0, 1);
        g.add_edge(2, 1);
        let tree = DepthFirstSearch::new(&g).search(0);
        assert!(tree.marked(1));
        assert!(!tree.marked(2));
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let n = 200_000;
        let mut g = Digraph::new(n);
        for v in 0..n - 1 {
            g.add_edge(v, v + 1);
        }
        let tree = DepthFirstSearch::new(&g).search(0);
        assert!(tree.marked(n - 1));
        assert_eq!(tree.distance_to(n - 1), Some(n - 1));
    }
}
