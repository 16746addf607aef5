//! Sparse adjacency-list storage, the representation the metrics run on

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{weakly_connected_from_zero, Graph, Neighbor, VertexAttributes};

/// Per-vertex neighbor lists of a directed weighted graph
///
/// Memory is O(V+E). Out-degree is the list length, but in-degree has to
/// scan every list: O(V+E) against the matrix storage's O(V). Edge lookups
/// scan the source's list, which stays short for interaction graphs.
///
/// Neighbor lists keep insertion order. Deserialized documents are rebuilt
/// edge by edge and rejected unless they describe a valid graph.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdjacencyListGraph {
    attributes: VertexAttributes,
    adjacency: Vec<Vec<Neighbor>>,
    edge_count: usize,
}

impl AdjacencyListGraph {
    /// Create an edgeless graph with `vertex_count` vertices
    pub fn new(vertex_count: usize) -> Self {
        Self {
            attributes: VertexAttributes::new(vertex_count),
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Out-edges of `u` in insertion order; empty when `u` is out of range
    pub fn neighbors(&self, u: usize) -> &[Neighbor] {
        self.adjacency.get(u).map(Vec::as_slice).unwrap_or_default()
    }

    /// In-degree of every vertex, computed in a single pass
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.adjacency.len()];
        for neighbor in self.adjacency.iter().flatten() {
            degrees[neighbor.target] += 1;
        }
        degrees
    }

    /// Out-degree of every vertex
    pub fn out_degrees(&self) -> Vec<usize> {
        self.adjacency.iter().map(Vec::len).collect()
    }

    fn find(&self, u: usize, v: usize) -> Option<&Neighbor> {
        self.neighbors(u).iter().find(|neighbor| neighbor.target == v)
    }
}

/// Serialized shape of [`AdjacencyListGraph`], before validation
#[derive(Deserialize)]
struct RawAdjacencyListGraph {
    attributes: RawVertexAttributes,
    adjacency: Vec<Vec<Neighbor>>,
    edge_count: usize,
}

#[derive(Deserialize)]
struct RawVertexAttributes {
    weights: Vec<f64>,
    labels: Vec<String>,
}

impl RawAdjacencyListGraph {
    fn into_graph(self) -> Result<AdjacencyListGraph> {
        let RawVertexAttributes { weights, labels } = self.attributes;
        let vertex_count = weights.len();
        if labels.len() != vertex_count || self.adjacency.len() != vertex_count {
            return Err(GraphError::InvalidGraph(format!(
                "{} weights, {} labels and {} adjacency lists",
                vertex_count,
                labels.len(),
                self.adjacency.len()
            )));
        }

        let mut graph = AdjacencyListGraph::new(vertex_count);
        for (v, (weight, label)) in weights.into_iter().zip(labels).enumerate() {
            graph.set_vertex_weight(v, weight);
            graph.set_vertex_label(v, &label);
        }

        for (u, list) in self.adjacency.into_iter().enumerate() {
            for Neighbor { target, weight } in list {
                if target >= vertex_count || target == u || graph.has_edge(u, target) {
                    return Err(GraphError::InvalidGraph(format!(
                        "edge {} -> {} is out of range, a self-loop or a duplicate",
                        u, target
                    )));
                }
                graph.add_edge(u, target, weight);
            }
        }

        if graph.edge_count != self.edge_count {
            return Err(GraphError::InvalidGraph(format!(
                "edge_count is {} but {} edges are stored",
                self.edge_count, graph.edge_count
            )));
        }
        Ok(graph)
    }
}

impl<'de> Deserialize<'de> for AdjacencyListGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        RawAdjacencyListGraph::deserialize(deserializer)?
            .into_graph()
            .map_err(serde::de::Error::custom)
    }
}

impl Graph for AdjacencyListGraph {
    fn attributes(&self) -> &VertexAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut VertexAttributes {
        &mut self.attributes
    }

    fn add_edge(&mut self, u: usize, v: usize, weight: f64) {
        if u == v || !self.attributes.contains(v) {
            return;
        }
        let Some(list) = self.adjacency.get_mut(u) else {
            return;
        };

        match list.iter_mut().find(|neighbor| neighbor.target == v) {
            Some(existing) => existing.weight = weight,
            None => {
                list.push(Neighbor { target: v, weight });
                self.edge_count += 1;
            }
        }
    }

    fn remove_edge(&mut self, u: usize, v: usize) {
        let Some(list) = self.adjacency.get_mut(u) else {
            return;
        };
        if let Some(position) = list.iter().position(|neighbor| neighbor.target == v) {
            list.remove(position);
            self.edge_count -= 1;
        }
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.find(u, v).is_some()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn edge_weight(&self, u: usize, v: usize) -> f64 {
        self.find(u, v).map_or(0.0, |neighbor| neighbor.weight)
    }

    fn set_edge_weight(&mut self, u: usize, v: usize, weight: f64) {
        if let Some(existing) = self
            .adjacency
            .get_mut(u)
            .and_then(|list| list.iter_mut().find(|neighbor| neighbor.target == v))
        {
            existing.weight = weight;
        }
    }

    fn in_degree(&self, v: usize) -> usize {
        self.adjacency
            .iter()
            .flatten()
            .filter(|neighbor| neighbor.target == v)
            .count()
    }

    fn out_degree(&self, u: usize) -> usize {
        self.neighbors(u).len()
    }

    fn out_edges(&self, u: usize) -> Vec<Neighbor> {
        self.neighbors(u).to_vec()
    }

    /// Successors come straight from the frontier's list. Predecessors have no
    /// index, so every unvisited vertex's list is scanned for the frontier
    /// vertex, giving O(V·(V+E)) in the worst case.
    fn is_connected(&self) -> bool {
        weakly_connected_from_zero(self.vertex_count(), |current, visited, visit| {
            for neighbor in &self.adjacency[current] {
                if !visited[neighbor.target] {
                    visit(neighbor.target);
                }
            }
            for (other, list) in self.adjacency.iter().enumerate() {
                if !visited[other] && list.iter().any(|neighbor| neighbor.target == current) {
                    visit(other);
                }
            }
        })
    }
}
