//! Closeness via single-source shortest paths

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{AdjacencyListGraph, Graph};

const PROGRESS_INTERVAL: usize = 1000;

#[derive(Debug)]
struct QueueEntry {
    vertex: usize,
    distance: f64,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // min-heap on distance
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Dijkstra from `source`, with edge weights as traversal cost
///
/// `None` marks unreachable vertices. Negative-weight edges are not
/// traversed. An out-of-range source yields all `None`.
pub fn shortest_distances(graph: &AdjacencyListGraph, source: usize) -> Vec<Option<f64>> {
    let n = graph.vertex_count();
    let mut distances: Vec<Option<f64>> = vec![None; n];
    if source >= n {
        return distances;
    }

    let mut settled = vec![false; n];
    let mut queue = BinaryHeap::new();
    distances[source] = Some(0.0);
    queue.push(QueueEntry { vertex: source, distance: 0.0 });

    while let Some(QueueEntry { vertex, distance }) = queue.pop() {
        // Stale entry
        if settled[vertex] {
            continue;
        }
        settled[vertex] = true;

        for neighbor in graph.neighbors(vertex) {
            if neighbor.weight < 0.0 || settled[neighbor.target] {
                continue;
            }
            let candidate = distance + neighbor.weight;
            if distances[neighbor.target].map_or(true, |known| candidate < known) {
                distances[neighbor.target] = Some(candidate);
                queue.push(QueueEntry {
                    vertex: neighbor.target,
                    distance: candidate,
                });
            }
        }
    }

    distances
}

/// Closeness of every vertex
///
/// For a source, closeness is the number of vertices at strictly positive
/// distance divided by the sum of those distances. `None` when the source
/// reaches nothing at positive distance.
pub fn closeness_scores(graph: &AdjacencyListGraph) -> Vec<Option<f64>> {
    let n = graph.vertex_count();

    (0..n)
        .map(|source| {
            if source > 0 && source % PROGRESS_INTERVAL == 0 {
                log::debug!("Closeness: {}/{} sources processed", source, n);
            }

            let (count, total) = shortest_distances(graph, source)
                .into_iter()
                .flatten()
                .filter(|&d| d > 0.0)
                .fold((0usize, 0.0f64), |(count, total), d| (count + 1, total + d));

            (total > 0.0).then(|| count as f64 / total)
        })
        .collect()
}

/// Mean closeness over the vertices that have one; 0.0 when none does
pub fn closeness_coefficient(graph: &AdjacencyListGraph) -> f64 {
    mean_defined(&closeness_scores(graph))
}

pub(crate) fn mean_defined(scores: &[Option<f64>]) -> f64 {
    let (count, total) = scores
        .iter()
        .flatten()
        .fold((0usize, 0.0f64), |(count, total), s| (count + 1, total + s));

    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
