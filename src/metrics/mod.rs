//! Structural metrics over the sparse interaction graph

pub mod closeness;
pub mod degree;
pub mod influence;
pub mod structure;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::graph::{AdjacencyListGraph, Graph};

pub use closeness::{closeness_coefficient, closeness_scores, shortest_distances};
pub use degree::{degree_stats, DegreeStats, DegreeSummary};
pub use influence::{influence_ranking, InfluenceConfig, InfluenceResult};
pub use structure::{density, reciprocity, weighted_connectivity_index};

/// A vertex with its score in some ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedVertex {
    pub index: usize,
    pub label: String,
    pub score: f64,
}

/// The `k` highest-scoring vertices, highest first; ties go to the lower index
pub fn top_k<G, I>(graph: &G, scores: I, k: usize) -> Vec<RankedVertex>
where
    G: Graph + ?Sized,
    I: IntoIterator<Item = (usize, f64)>,
{
    scores
        .into_iter()
        .sorted_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)))
        .take(k)
        .map(|(index, score)| RankedVertex {
            index,
            label: graph.vertex_label(index).to_string(),
            score,
        })
        .collect()
}

/// Every metric computed for one interaction graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphReport {
    pub name: String,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub connected: bool,
    pub density: f64,
    pub reciprocity: f64,
    pub weighted_connectivity_index: f64,
    pub closeness: f64,
    pub degrees: DegreeStats,
    pub influence_iterations: usize,
    pub influence_converged: bool,
    pub top_influence: Vec<RankedVertex>,
    pub top_closeness: Vec<RankedVertex>,
}

impl GraphReport {
    /// Run every metric on `graph`
    pub fn compute(name: &str, graph: &AdjacencyListGraph, config: &Config) -> Self {
        log::info!(
            "Computing metrics for {} ({} vertices, {} edges)",
            name,
            graph.vertex_count(),
            graph.edge_count()
        );

        let ranking = influence_ranking(graph, &config.influence());
        let per_vertex_closeness = closeness_scores(graph);

        let report = Self {
            name: name.to_string(),
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            connected: graph.is_connected(),
            density: density(graph),
            reciprocity: reciprocity(graph),
            weighted_connectivity_index: weighted_connectivity_index(graph),
            closeness: closeness::mean_defined(&per_vertex_closeness),
            degrees: degree_stats(graph, config.top_k),
            influence_iterations: ranking.iterations,
            influence_converged: ranking.converged,
            top_influence: ranking.top_k(graph, config.top_k),
            top_closeness: top_k(
                graph,
                per_vertex_closeness
                    .iter()
                    .enumerate()
                    .filter_map(|(v, score)| score.map(|s| (v, s))),
                config.top_k,
            ),
        };

        log::debug!("Finished metrics for {}", name);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled_triangle() -> AdjacencyListGraph {
        let mut graph = AdjacencyListGraph::new(3);
        for (v, label) in ["ana", "bruno", "carla"].iter().enumerate() {
            graph.set_vertex_label(v, label);
        }
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(2, 0, 1.0);
        graph
    }

    #[test]
    fn top_k_orders_by_score_then_index() {
        let graph = labelled_triangle();
        let ranked = top_k(&graph, vec![(0, 0.2), (1, 0.5), (2, 0.5)], 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[0].label, "bruno");
        assert_eq!(ranked[1].index, 2);
    }

    #[test]
    fn report_collects_every_metric() {
        let graph = labelled_triangle();
        let report = GraphReport::compute("triangle", &graph, &Config::default());

        assert_eq!(report.vertex_count, 3);
        assert_eq!(report.edge_count, 3);
        assert!(report.connected);
        assert!((report.density - 0.5).abs() < 1e-12);
        assert_eq!(report.reciprocity, 0.0);
        assert!((report.weighted_connectivity_index - 1.0).abs() < 1e-12);
        // Each source reaches the others at distances 1 and 2.
        assert!((report.closeness - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(report.top_influence.len(), 3);
        assert_eq!(report.top_closeness.len(), 3);
    }

    #[test]
    fn report_serializes_to_json() {
        let graph = labelled_triangle();
        let report = GraphReport::compute("triangle", &graph, &Config::default());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["name"], "triangle");
        assert_eq!(json["edge_count"], 3);
        assert!(json["top_influence"].is_array());
    }
}
