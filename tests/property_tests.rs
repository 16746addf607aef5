//! Property tests for the graph contract and metric invariants

use std::collections::HashSet;

use interaction_graph_analyzer::graph::{AdjacencyListGraph, AdjacencyMatrixGraph, Graph};
use interaction_graph_analyzer::metrics::{
    closeness_coefficient, density, influence_ranking, reciprocity, shortest_distances,
    weighted_connectivity_index, InfluenceConfig,
};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(usize, usize, f64),
    Remove(usize, usize),
    SetWeight(usize, usize, f64),
}

/// Vertex count plus operations that may reference one index past the end
fn graph_ops() -> impl Strategy<Value = (usize, Vec<Op>)> {
    (1usize..8).prop_flat_map(|n| {
        let op = prop_oneof![
            3 => (0..=n, 0..=n, 0.0f64..10.0).prop_map(|(u, v, w)| Op::Add(u, v, w)),
            1 => (0..=n, 0..=n).prop_map(|(u, v)| Op::Remove(u, v)),
            1 => (0..=n, 0..=n, 0.0f64..10.0).prop_map(|(u, v, w)| Op::SetWeight(u, v, w)),
        ];
        (Just(n), prop::collection::vec(op, 0..40))
    })
}

/// Vertex count plus in-range edges with non-negative weights
fn weighted_edges() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    (1usize..9).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0.0f64..10.0), 0..30),
        )
    })
}

fn apply(graph: &mut dyn Graph, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::Add(u, v, w) => graph.add_edge(u, v, w),
            Op::Remove(u, v) => graph.remove_edge(u, v),
            Op::SetWeight(u, v, w) => graph.set_edge_weight(u, v, w),
        }
    }
}

fn sparse_from(n: usize, edges: &[(usize, usize, f64)]) -> AdjacencyListGraph {
    let mut graph = AdjacencyListGraph::new(n);
    for &(u, v, w) in edges {
        graph.add_edge(u, v, w);
    }
    graph
}

/// Same edges in petgraph, keeping only the final weight per pair
fn petgraph_from(graph: &AdjacencyListGraph) -> DiGraph<(), f64> {
    let mut reference = DiGraph::new();
    let nodes: Vec<NodeIndex> = (0..graph.vertex_count())
        .map(|_| reference.add_node(()))
        .collect();
    for u in 0..graph.vertex_count() {
        for edge in graph.neighbors(u) {
            reference.add_edge(nodes[u], nodes[edge.target], edge.weight);
        }
    }
    reference
}

proptest! {
    #[test]
    fn storages_agree_on_every_query((n, ops) in graph_ops()) {
        let mut sparse = AdjacencyListGraph::new(n);
        let mut dense = AdjacencyMatrixGraph::new(n);
        apply(&mut sparse, &ops);
        apply(&mut dense, &ops);

        prop_assert_eq!(sparse.edge_count(), dense.edge_count());
        prop_assert_eq!(sparse.is_connected(), dense.is_connected());
        prop_assert_eq!(sparse.is_complete_graph(), dense.is_complete_graph());
        for u in 0..=n {
            prop_assert_eq!(sparse.in_degree(u), dense.in_degree(u));
            prop_assert_eq!(sparse.out_degree(u), dense.out_degree(u));
            for v in 0..=n {
                prop_assert_eq!(sparse.has_edge(u, v), dense.has_edge(u, v));
                prop_assert_eq!(sparse.edge_weight(u, v), dense.edge_weight(u, v));
            }
        }
    }

    #[test]
    fn edge_count_tracks_distinct_pairs((n, ops) in graph_ops()) {
        let mut graph = AdjacencyListGraph::new(n);
        let mut expected = HashSet::new();
        for op in &ops {
            match *op {
                Op::Add(u, v, w) => {
                    graph.add_edge(u, v, w);
                    if u != v && u < n && v < n {
                        expected.insert((u, v));
                        prop_assert_eq!(graph.edge_weight(u, v), w);
                    }
                }
                Op::Remove(u, v) => {
                    graph.remove_edge(u, v);
                    expected.remove(&(u, v));
                    prop_assert!(!graph.has_edge(u, v));
                }
                Op::SetWeight(u, v, w) => graph.set_edge_weight(u, v, w),
            }
            prop_assert_eq!(graph.edge_count(), expected.len());
        }
        prop_assert_eq!(graph.is_complete_graph(), expected.len() == n * (n - 1));
        prop_assert_eq!(graph.is_empty_graph(), expected.is_empty());
    }

    #[test]
    fn self_loops_never_appear(n in 1usize..6, u in 0usize..6, w in -5.0f64..5.0) {
        let mut graph = AdjacencyListGraph::new(n);
        graph.add_edge(u, u, w);
        prop_assert_eq!(graph.edge_count(), 0);
        prop_assert!(!graph.has_edge(u, u));
    }

    #[test]
    fn influence_ranks_sum_to_one((n, edges) in weighted_edges()) {
        let graph = sparse_from(n, &edges);
        let result = influence_ranking(&graph, &InfluenceConfig::default());
        let total: f64 = result.ranks.iter().sum();
        prop_assert_eq!(result.ranks.len(), n);
        prop_assert!((total - 1.0).abs() < 1e-6);
        prop_assert!(result.ranks.iter().all(|&r| r >= 0.0));
    }

    #[test]
    fn weak_connectivity_matches_petgraph((n, edges) in weighted_edges()) {
        let graph = sparse_from(n, &edges);
        let components = petgraph::algo::connected_components(&petgraph_from(&graph));
        prop_assert_eq!(graph.is_connected(), components == 1);
    }

    #[test]
    fn shortest_distances_match_petgraph((n, edges) in weighted_edges(), source in 0usize..9) {
        let graph = sparse_from(n, &edges);
        let source = source % n;
        let reference = petgraph_from(&graph);
        let expected = petgraph::algo::dijkstra(&reference, NodeIndex::new(source), None, |e| *e.weight());

        let distances = shortest_distances(&graph, source);
        for (v, distance) in distances.iter().enumerate() {
            match (distance, expected.get(&NodeIndex::new(v))) {
                (Some(ours), Some(theirs)) => prop_assert!((ours - theirs).abs() < 1e-9),
                (None, None) => {}
                (ours, theirs) => prop_assert!(false, "vertex {}: {:?} vs {:?}", v, ours, theirs),
            }
        }
    }

    #[test]
    fn metrics_stay_in_range((n, edges) in weighted_edges()) {
        let graph = sparse_from(n, &edges);

        let d = density(&graph);
        prop_assert!((0.0..=1.0).contains(&d));

        let r = reciprocity(&graph);
        prop_assert!((0.0..=1.0).contains(&r));

        prop_assert!(weighted_connectivity_index(&graph) >= 0.0);
        prop_assert!(closeness_coefficient(&graph) >= 0.0);
    }
}
