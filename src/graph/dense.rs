//! Dense adjacency-matrix storage

use ndarray::Array2;

use crate::graph::{weakly_connected_from_zero, Graph, Neighbor, VertexAttributes};

/// V×V matrix representation of a directed weighted graph
///
/// Edge tests and weight lookups are O(1) and degree queries scan one row or
/// column in O(V). Memory is O(V²) whatever the edge count, so this storage
/// only pays off when the graph is close to complete.
///
/// Each cell holds `Some(weight)` when the edge is present, so a zero-weight
/// edge is distinct from an absent one.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph {
    attributes: VertexAttributes,
    matrix: Array2<Option<f64>>,
    edge_count: usize,
}

impl AdjacencyMatrixGraph {
    /// Create an edgeless graph with `vertex_count` vertices
    pub fn new(vertex_count: usize) -> Self {
        Self {
            attributes: VertexAttributes::new(vertex_count),
            matrix: Array2::from_elem((vertex_count, vertex_count), None),
            edge_count: 0,
        }
    }

    fn cell(&self, u: usize, v: usize) -> Option<f64> {
        self.matrix.get((u, v)).copied().flatten()
    }
}

impl Graph for AdjacencyMatrixGraph {
    fn attributes(&self) -> &VertexAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut VertexAttributes {
        &mut self.attributes
    }

    fn add_edge(&mut self, u: usize, v: usize, weight: f64) {
        if u == v {
            return;
        }
        if let Some(slot) = self.matrix.get_mut((u, v)) {
            if slot.is_none() {
                self.edge_count += 1;
            }
            *slot = Some(weight);
        }
    }

    fn remove_edge(&mut self, u: usize, v: usize) {
        if let Some(slot) = self.matrix.get_mut((u, v)) {
            if slot.take().is_some() {
                self.edge_count -= 1;
            }
        }
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.cell(u, v).is_some()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn edge_weight(&self, u: usize, v: usize) -> f64 {
        self.cell(u, v).unwrap_or(0.0)
    }

    fn set_edge_weight(&mut self, u: usize, v: usize, weight: f64) {
        if let Some(Some(current)) = self.matrix.get_mut((u, v)) {
            *current = weight;
        }
    }

    fn in_degree(&self, v: usize) -> usize {
        if !self.attributes.contains(v) {
            return 0;
        }
        self.matrix.column(v).iter().filter(|cell| cell.is_some()).count()
    }

    fn out_degree(&self, u: usize) -> usize {
        if !self.attributes.contains(u) {
            return 0;
        }
        self.matrix.row(u).iter().filter(|cell| cell.is_some()).count()
    }

    fn out_edges(&self, u: usize) -> Vec<Neighbor> {
        if !self.attributes.contains(u) {
            return Vec::new();
        }
        self.matrix
            .row(u)
            .iter()
            .enumerate()
            .filter_map(|(target, cell)| cell.map(|weight| Neighbor { target, weight }))
            .collect()
    }

    fn is_connected(&self) -> bool {
        let n = self.vertex_count();
        weakly_connected_from_zero(n, |current, visited, visit| {
            for other in 0..n {
                if !visited[other]
                    && (self.matrix[(current, other)].is_some()
                        || self.matrix[(other, current)].is_some())
                {
                    visit(other);
                }
            }
        })
    }
}
