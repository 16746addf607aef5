//! Graph representation module
//!
//! [`Graph`] is the capability set shared by both storages. Vertex weights and
//! labels live in [`VertexAttributes`], which each storage embeds.
//!
//! Every accessor absorbs out-of-range vertex indices: mutators become no-ops
//! and queries return their default value (`false`, `0`, `0.0`, `""`).

pub mod dense;
pub mod sparse;

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub use dense::AdjacencyMatrixGraph;
pub use sparse::AdjacencyListGraph;

/// Weight used by [`Graph::add_unweighted_edge`]
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// A weighted out-edge as seen from its source vertex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// Target vertex index
    pub target: usize,

    /// Edge weight
    pub weight: f64,
}

/// Per-vertex state shared by every storage: a numeric weight and a label
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VertexAttributes {
    weights: Vec<f64>,
    labels: Vec<String>,
}

impl VertexAttributes {
    /// Attributes for `vertex_count` vertices, all weights 0.0 and labels empty
    pub fn new(vertex_count: usize) -> Self {
        Self {
            weights: vec![0.0; vertex_count],
            labels: vec![String::new(); vertex_count],
        }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn contains(&self, v: usize) -> bool {
        v < self.len()
    }

    pub fn weight(&self, v: usize) -> f64 {
        self.weights.get(v).copied().unwrap_or(0.0)
    }

    pub fn set_weight(&mut self, v: usize, weight: f64) {
        if let Some(slot) = self.weights.get_mut(v) {
            *slot = weight;
        }
    }

    pub fn label(&self, v: usize) -> &str {
        self.labels.get(v).map_or("", String::as_str)
    }

    pub fn set_label(&mut self, v: usize, label: impl Into<String>) {
        if let Some(slot) = self.labels.get_mut(v) {
            *slot = label.into();
        }
    }
}

/// Directed, weighted, simple graph over vertices `0..vertex_count()`
///
/// Self-loops are rejected and at most one edge exists per ordered pair.
/// Adding an existing edge overwrites its weight.
pub trait Graph {
    fn attributes(&self) -> &VertexAttributes;

    fn attributes_mut(&mut self) -> &mut VertexAttributes;

    /// Insert or update the edge `u -> v`
    fn add_edge(&mut self, u: usize, v: usize, weight: f64);

    fn remove_edge(&mut self, u: usize, v: usize);

    fn has_edge(&self, u: usize, v: usize) -> bool;

    fn edge_count(&self) -> usize;

    /// Weight of `u -> v`, or 0.0 when the edge is absent
    fn edge_weight(&self, u: usize, v: usize) -> f64;

    /// Update the weight of an existing edge; absent edges are left absent
    fn set_edge_weight(&mut self, u: usize, v: usize, weight: f64);

    fn in_degree(&self, v: usize) -> usize;

    fn out_degree(&self, u: usize) -> usize;

    /// Successors of `u` with their edge weights
    fn out_edges(&self, u: usize) -> Vec<Neighbor>;

    /// Weak connectivity: every vertex reachable from vertex 0 when edge
    /// direction is ignored. The empty graph is connected.
    fn is_connected(&self) -> bool;

    fn vertex_count(&self) -> usize {
        self.attributes().len()
    }

    fn vertex_weight(&self, v: usize) -> f64 {
        self.attributes().weight(v)
    }

    fn set_vertex_weight(&mut self, v: usize, weight: f64) {
        self.attributes_mut().set_weight(v, weight);
    }

    fn vertex_label(&self, v: usize) -> &str {
        self.attributes().label(v)
    }

    fn set_vertex_label(&mut self, v: usize, label: &str) {
        self.attributes_mut().set_label(v, label);
    }

    fn add_unweighted_edge(&mut self, u: usize, v: usize) {
        self.add_edge(u, v, DEFAULT_EDGE_WEIGHT);
    }

    fn is_successor(&self, u: usize, v: usize) -> bool {
        self.has_edge(u, v)
    }

    fn is_predecessor(&self, u: usize, v: usize) -> bool {
        self.has_edge(u, v)
    }

    /// Whether `x` is an endpoint of the existing edge `u -> v`
    fn is_incident(&self, u: usize, v: usize, x: usize) -> bool {
        self.has_edge(u, v) && (x == u || x == v)
    }

    /// Two distinct existing edges leaving the same source
    fn is_divergent(&self, u1: usize, v1: usize, u2: usize, v2: usize) -> bool {
        self.has_edge(u1, v1) && self.has_edge(u2, v2) && u1 == u2 && v1 != v2
    }

    /// Two distinct existing edges entering the same target
    fn is_convergent(&self, u1: usize, v1: usize, u2: usize, v2: usize) -> bool {
        self.has_edge(u1, v1) && self.has_edge(u2, v2) && v1 == v2 && u1 != u2
    }

    fn is_empty_graph(&self) -> bool {
        self.edge_count() == 0
    }

    /// Every ordered pair of distinct vertices has an edge
    fn is_complete_graph(&self) -> bool {
        self.edge_count() == max_edge_count(self.vertex_count())
    }
}

/// Maximum edge count of a simple directed graph without self-loops
pub fn max_edge_count(vertex_count: usize) -> usize {
    vertex_count * vertex_count.saturating_sub(1)
}

/// Breadth-first weak-connectivity check shared by both storages.
///
/// `expand` is called once per dequeued vertex and reports every unvisited
/// vertex adjacent to it, in either direction, through its callback.
pub(crate) fn weakly_connected_from_zero<F>(vertex_count: usize, mut expand: F) -> bool
where
    F: FnMut(usize, &[bool], &mut dyn FnMut(usize)),
{
    if vertex_count == 0 {
        return true;
    }

    let mut visited = vec![false; vertex_count];
    let mut queue = VecDeque::new();
    visited[0] = true;
    queue.push_back(0);
    let mut reached = 0;

    while let Some(current) = queue.pop_front() {
        reached += 1;

        let mut discovered = Vec::new();
        expand(current, &visited, &mut |next: usize| discovered.push(next));

        for next in discovered {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    reached == vertex_count
}

/// Storage representation chosen when a graph is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    /// V×V weight matrix: O(1) edge tests, O(V²) memory
    Dense,
    /// Per-vertex neighbor lists: O(V+E) memory, O(V+E) in-degree queries
    Sparse,
}

impl GraphKind {
    /// Pick the dense matrix when the expected edge density reaches `threshold`
    pub fn for_expected_density(vertex_count: usize, expected_edges: usize, threshold: f64) -> Self {
        let max_edges = max_edge_count(vertex_count);
        if max_edges > 0 && expected_edges as f64 / max_edges as f64 >= threshold {
            GraphKind::Dense
        } else {
            GraphKind::Sparse
        }
    }

    /// Construct an empty graph of this kind
    pub fn build(self, vertex_count: usize) -> Box<dyn Graph> {
        match self {
            GraphKind::Dense => Box::new(AdjacencyMatrixGraph::new(vertex_count)),
            GraphKind::Sparse => Box::new(AdjacencyListGraph::new(vertex_count)),
        }
    }
}
