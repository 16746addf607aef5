//! Whole-graph cohesion metrics: weighted connectivity index, reciprocity, density

use std::collections::HashSet;

use crate::graph::{max_edge_count, AdjacencyListGraph, Graph};

/// Weighted connectivity index (GMCE)
///
/// For each vertex `u` with out-degree `d(u) > 0`, takes `d(u)` times the mean
/// out-degree of its successors, sums over all vertices and divides by V.
/// Vertices without out-edges add nothing but still count in V.
pub fn weighted_connectivity_index(graph: &AdjacencyListGraph) -> f64 {
    let n = graph.vertex_count();
    if n == 0 {
        return 0.0;
    }

    let out_degrees = graph.out_degrees();

    let total: f64 = (0..n)
        .filter(|&u| out_degrees[u] > 0)
        .map(|u| {
            let degree = out_degrees[u] as f64;
            let successor_sum: usize = graph
                .neighbors(u)
                .iter()
                .map(|neighbor| out_degrees[neighbor.target])
                .sum();
            degree * (successor_sum as f64 / degree)
        })
        .sum();

    total / n as f64
}

/// Fraction of interacting unordered pairs whose interaction goes both ways
///
/// Returns 0.0 when no pair interacts.
pub fn reciprocity(graph: &AdjacencyListGraph) -> f64 {
    let mut interacting = HashSet::new();
    let mut mutual = 0usize;

    for u in 0..graph.vertex_count() {
        for neighbor in graph.neighbors(u) {
            let pair = (u.min(neighbor.target), u.max(neighbor.target));
            if interacting.insert(pair) && graph.has_edge(neighbor.target, u) {
                mutual += 1;
            }
        }
    }

    if interacting.is_empty() {
        0.0
    } else {
        mutual as f64 / interacting.len() as f64
    }
}

/// Edge count over the V·(V−1) possible directed edges; 0.0 when V ≤ 1
pub fn density<G: Graph + ?Sized>(graph: &G) -> f64 {
    let possible = max_edge_count(graph.vertex_count());
    if possible == 0 {
        0.0
    } else {
        graph.edge_count() as f64 / possible as f64
    }
}
