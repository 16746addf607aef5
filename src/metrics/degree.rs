//! Degree distribution statistics

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::graph::AdjacencyListGraph;
use crate::metrics::{top_k, RankedVertex};

/// Summary of one degree distribution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DegreeSummary {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl DegreeSummary {
    fn from_degrees(degrees: &[usize]) -> Self {
        if degrees.is_empty() {
            return Self::default();
        }

        let values: Vec<f64> = degrees.iter().map(|&d| d as f64).collect();
        Self {
            min: Iterator::min(degrees.iter().copied()).unwrap_or(0),
            max: Iterator::max(degrees.iter().copied()).unwrap_or(0),
            mean: Statistics::mean(values.iter()),
            std_dev: Statistics::population_std_dev(values.iter()),
        }
    }
}

/// In- and out-degree distributions plus the best-connected vertices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DegreeStats {
    pub in_degree: DegreeSummary,
    pub out_degree: DegreeSummary,
    /// Vertices with the highest in-degree + out-degree
    pub top_total: Vec<RankedVertex>,
}

/// Degree statistics over every vertex of the graph
pub fn degree_stats(graph: &AdjacencyListGraph, k: usize) -> DegreeStats {
    let in_degrees = graph.in_degrees();
    let out_degrees = graph.out_degrees();

    let totals = in_degrees
        .iter()
        .zip(&out_degrees)
        .enumerate()
        .map(|(v, (i, o))| (v, (i + o) as f64));

    DegreeStats {
        in_degree: DegreeSummary::from_degrees(&in_degrees),
        out_degree: DegreeSummary::from_degrees(&out_degrees),
        top_total: top_k(graph, totals, k),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn star_graph_statistics() {
        // Everyone points at vertex 0.
        let mut graph = AdjacencyListGraph::new(4);
        for v in 1..4 {
            graph.add_edge(v, 0, 1.0);
        }
        graph.set_vertex_label(0, "hub");

        let stats = degree_stats(&graph, 1);

        assert_eq!(stats.in_degree.min, 0);
        assert_eq!(stats.in_degree.max, 3);
        assert!((stats.in_degree.mean - 0.75).abs() < 1e-12);
        // Population variance of [3, 0, 0, 0] is 1.6875.
        assert!((stats.in_degree.std_dev - 1.6875f64.sqrt()).abs() < 1e-12);

        assert_eq!(stats.out_degree.min, 0);
        assert_eq!(stats.out_degree.max, 1);

        assert_eq!(stats.top_total.len(), 1);
        assert_eq!(stats.top_total[0].label, "hub");
        assert_eq!(stats.top_total[0].score, 3.0);
    }

    #[test]
    fn empty_graph_has_zero_statistics() {
        let stats = degree_stats(&AdjacencyListGraph::new(0), 5);
        assert_eq!(stats, DegreeStats::default());
    }
}
