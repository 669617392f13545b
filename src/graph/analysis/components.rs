//! Connected components of an undirected graph.

use crate::collections::Stack;
use crate::graph::access::VisitedFlags;
use crate::graph::UndirectedGraph;

/// Component labels for every vertex, computed once at construction.
///
/// Component ids are assigned `0, 1, 2, ...` in order of each component's
/// lowest vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponents {
    ids: Vec<usize>,
    count: usize,
}

impl ConnectedComponents {
    /// Labels the components of `graph` by flood fill from each unvisited vertex.
    pub fn new(graph: &UndirectedGraph) -> Self {
        let n = graph.vertex_count();
        let mut ids = vec![0; n];
        let mut marked = VisitedFlags::new(n);
        let mut pending = Stack::new();
        let mut count = 0;

        for root in 0..n {
            if !marked.try_visit(root) {
                continue;
            }
            pending.push(root);
            while let Some(v) = pending.pop() {
                ids[v] = count;
                for &w in graph.adjacents(v) {
                    if marked.try_visit(w) {
                        pending.push(w);
                    }
                }
            }
            count += 1;
        }

        tracing::trace!(vertices = n, components = count, "components labelled");
        Self { ids, count }
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The component id of `v`, `None` when out of range.
    pub fn component_of(&self, v: usize) -> Option<usize> {
        self.ids.get(v).copied()
    }

    /// Returns `true` if every listed vertex lies in the same component.
    ///
    /// An empty list, or one naming a vertex outside the graph, is not connected.
    pub fn connected(&self, vertices: &[usize]) -> bool {
        let Some((&first, rest)) = vertices.split_first() else {
            return false;
        };
        let Some(id) = self.component_of(first) else {
            return false;
        };
        rest.iter().all(|&v| self.component_of(v) == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_islands() -> UndirectedGraph {
        // {0, 1, 2} and {3, 4}; 5 alone.
        let mut g = UndirectedGraph::new(6);
        g.add_edge(0, 1);
        g.add_edge(2, 1);
        g.add_edge(4, 3);
        g
    }

    #[test]
    fn test_labels_in_vertex_order() {
        let cc = ConnectedComponents::new(&two_islands());
        assert_eq!(cc.count(), 3);
        assert_eq!(cc.component_of(0), Some(0));
        assert_eq!(cc.component_of(2), Some(0));
        assert_eq!(cc.component_of(3), Some(1));
        assert_eq!(cc.component_of(5), Some(2));
        assert_eq!(cc.component_of(6), None);
    }

    #[test]
    fn test_connected_queries() {
        let cc = ConnectedComponents::new(&two_islands());
        assert!(cc.connected(&[0, 2]));
        assert!(cc.connected(&[1, 0, 2]));
        assert!(cc.connected(&[5]));
        assert!(!cc.connected(&[0, 3]));
        assert!(!cc.connected(&[]));
        assert!(!cc.connected(&[0, 99]));
        assert!(!cc.connected(&[99]));
    }

    #[test]
    fn test_empty_graph() {
        let cc = ConnectedComponents::new(&UndirectedGraph::new(0));
        assert_eq!(cc.count(), 0);
        assert!(!cc.connected(&[0]));
    }
}
