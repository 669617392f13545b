//! Randomized checks against `petgraph` as a reference implementation.

use dsal::graph::{
    BreadthFirstSearch, ConnectedComponents, CycleFinder, DepthFirstSearch, Digraph,
    EdgeWeightedDigraph, ShortestPath, UndirectedGraph,
};
use petgraph::algo::{connected_components, dijkstra, has_path_connecting, is_cyclic_directed};
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use proptest::prelude::*;

fn edge_lists() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..12).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..30)))
}

fn weighted_edge_lists() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    (1usize..10).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0.0f64..10.0), 0..30),
        )
    })
}

fn build_undirected(n: usize, edges: &[(usize, usize)]) -> (UndirectedGraph, UnGraph<(), ()>) {
    let mut ours = UndirectedGraph::new(n);
    let mut theirs = UnGraph::new_undirected();
    for _ in 0..n {
        theirs.add_node(());
    }
    for &(v, w) in edges {
        ours.add_edge(v, w);
        theirs.add_edge(NodeIndex::new(v), NodeIndex::new(w), ());
    }
    (ours, theirs)
}

fn build_directed(n: usize, edges: &[(usize, usize)]) -> (Digraph, DiGraph<(), ()>) {
    let mut ours = Digraph::new(n);
    let mut theirs = DiGraph::new();
    for _ in 0..n {
        theirs.add_node(());
    }
    for &(v, w) in edges {
        ours.add_edge(v, w);
        theirs.add_edge(NodeIndex::new(v), NodeIndex::new(w), ());
    }
    (ours, theirs)
}

proptest! {
    #[test]
    fn test_undirected_edge_count_is_half_the_list_lengths((n, edges) in edge_lists()) {
        let (g, _) = build_undirected(n, &edges);
        let total: usize = (0..n).map(|v| g.adjacents(v).len()).sum();
        prop_assert_eq!(g.edge_count(), edges.len());
        prop_assert_eq!(total, 2 * g.edge_count());
    }

    #[test]
    fn test_search_reachability_matches_petgraph((n, edges) in edge_lists(), source in 0usize..12) {
        let (g, pg) = build_directed(n, &edges);
        let source = source % n;
        let dfs = DepthFirstSearch::new(&g).search(source);
        let bfs = BreadthFirstSearch::new(&g).search(source);
        for v in 0..n {
            let expected = has_path_connecting(&pg, NodeIndex::new(source), NodeIndex::new(v), None);
            prop_assert_eq!(dfs.marked(v), expected);
            prop_assert_eq!(bfs.marked(v), expected);
        }
    }

    #[test]
    fn test_bfs_paths_are_shortest_and_no_longer_than_dfs((n, edges) in edge_lists(), source in 0usize..12) {
        let (g, pg) = build_undirected(n, &edges);
        let source = source % n;
        let hops = dijkstra(&pg, NodeIndex::new(source), None, |_| 1usize);
        let dfs = DepthFirstSearch::new(&g).search(source);
        let bfs = BreadthFirstSearch::new(&g).search(source);
        for v in 0..n {
            prop_assert_eq!(bfs.distance_to(v), hops.get(&NodeIndex::new(v)).copied());
            if bfs.marked(v) {
                prop_assert_eq!(bfs.path_to(v).last().copied(), Some(source));
                prop_assert!(bfs.path_to(v).len() <= dfs.path_to(v).len());
            }
        }
    }

    #[test]
    fn test_components_match_petgraph((n, edges) in edge_lists()) {
        let (g, pg) = build_undirected(n, &edges);
        let cc = ConnectedComponents::new(&g);
        prop_assert_eq!(cc.count(), connected_components(&pg));
        for v in 0..n {
            for w in 0..n {
                let expected = has_path_connecting(&pg, NodeIndex::new(v), NodeIndex::new(w), None);
                prop_assert_eq!(cc.connected(&[v, w]), expected);
            }
        }
    }

    #[test]
    fn test_reported_cycles_are_real((n, edges) in edge_lists()) {
        let (g, pg) = build_directed(n, &edges);
        let finder = CycleFinder::new(&g);

        prop_assert_eq!(finder.find_any().has_cycle(), is_cyclic_directed(&pg));

        for start in 0..n {
            let cycle = finder.cycle(start);
            let mut seen = cycle.vertices().to_vec();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), cycle.len());
            for (v, w) in cycle.edges() {
                prop_assert!(g.adjacents(v).contains(&w));
            }
            if let Some(&first) = cycle.vertices().first() {
                prop_assert!(has_path_connecting(&pg, NodeIndex::new(start), NodeIndex::new(first), None));
            }
        }
    }

    #[test]
    fn test_reversed_twice_keeps_every_edge((n, edges) in edge_lists()) {
        let (g, _) = build_directed(n, &edges);
        let twice = g.reversed().reversed();
        for v in 0..n {
            let mut a = g.adjacents(v).to_vec();
            let mut b = twice.adjacents(v).to_vec();
            a.sort_unstable();
            b.sort_unstable();
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn test_shortest_distances_match_dijkstra((n, edges) in weighted_edge_lists(), source in 0usize..10) {
        let source = source % n;
        let mut ours = EdgeWeightedDigraph::new(n);
        let mut theirs = DiGraph::<(), f64>::new();
        for _ in 0..n {
            theirs.add_node(());
        }
        for &(v, w, weight) in &edges {
            ours.add_edge(v, w, weight);
            theirs.add_edge(NodeIndex::new(v), NodeIndex::new(w), weight);
        }

        let sp = ShortestPath::new(&ours, source);
        let expected = dijkstra(&theirs, NodeIndex::new(source), None, |e| *e.weight());
        for v in 0..n {
            match expected.get(&NodeIndex::new(v)) {
                Some(&d) => {
                    prop_assert!((sp.distance(v) - d).abs() < 1e-9);
                    let path = sp.path_to(v);
                    prop_assert_eq!(path.first().copied(), Some(v));
                    prop_assert_eq!(path.last().copied(), Some(source));
                }
                None => {
                    prop_assert!(!sp.has_path_to(v));
                    prop_assert!(sp.path_to(v).is_empty());
                }
            }
        }
    }
}
