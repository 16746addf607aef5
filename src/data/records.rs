//! Two-pass CSV loader for interaction records
//!
//! Rows look like `source, target, ..., weight, reference` with a header
//! line first. The first pass collects every endpoint key and sorts them so
//! the same file always yields the same vertex indices; the second pass
//! inserts one edge per row. Rows that cannot be used are skipped.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};
use crate::graph::{AdjacencyListGraph, Graph};

/// Row accounting for the edge pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Data rows read, header excluded
    pub rows: usize,
    /// Rows that produced an edge insert or weight update
    pub edges_applied: usize,
    /// Rows with missing columns, a non-numeric weight or an unknown key
    pub skipped_rows: usize,
    /// Rows whose source and target are the same participant
    pub self_loops: usize,
}

/// Vertex index of a record file, built by the first pass
#[derive(Debug, Clone)]
pub struct InteractionRecords {
    path: PathBuf,
    weight_column: usize,
    keys: Vec<String>,
    index: HashMap<String, usize>,
}

impl InteractionRecords {
    /// First pass: collect and index every endpoint key in `path`
    pub fn scan(path: impl AsRef<Path>, weight_column: usize) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut reader = open(&path)?;

        let mut keys = BTreeSet::new();
        for row in reader.records() {
            let record = match row {
                Ok(record) => record,
                Err(source) if source.is_io_error() => {
                    return Err(GraphError::Input { path, source });
                }
                Err(_) => continue,
            };
            if let (Some(source), Some(target)) = (record.get(0), record.get(1)) {
                keys.insert(source.to_string());
                keys.insert(target.to_string());
            }
        }

        let keys: Vec<String> = keys.into_iter().collect();
        let index = keys
            .iter()
            .enumerate()
            .map(|(i, key)| (key.clone(), i))
            .collect();

        log::debug!("Indexed {} participants from {}", keys.len(), path.display());

        Ok(Self {
            path,
            weight_column,
            keys,
            index,
        })
    }

    /// Keys in index order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn vertex_count(&self) -> usize {
        self.keys.len()
    }

    /// Second pass: label the vertices and insert one edge per usable row
    ///
    /// Works with either storage; `graph` should have at least
    /// [`vertex_count`](Self::vertex_count) vertices.
    pub fn populate<G: Graph + ?Sized>(&self, graph: &mut G) -> Result<LoadStats> {
        // Label vertices with their keys
        for (v, key) in self.keys.iter().enumerate() {
            graph.set_vertex_label(v, key);
        }

        let mut reader = open(&self.path)?;
        let mut stats = LoadStats::default();

        for row in reader.records() {
            stats.rows += 1;
            let record = match row {
                Ok(record) => record,
                Err(source) if source.is_io_error() => {
                    return Err(GraphError::Input {
                        path: self.path.clone(),
                        source,
                    });
                }
                Err(_) => {
                    stats.skipped_rows += 1;
                    continue;
                }
            };

            let Some((u, v, weight)) = self.parse_edge(&record) else {
                stats.skipped_rows += 1;
                continue;
            };

            // The graph would ignore it anyway; count it separately
            if u == v {
                stats.self_loops += 1;
                continue;
            }
            graph.add_edge(u, v, weight);
            stats.edges_applied += 1;
        }

        if stats.skipped_rows > 0 {
            log::warn!(
                "Skipped {} malformed rows in {}",
                stats.skipped_rows,
                self.path.display()
            );
        }

        Ok(stats)
    }

    fn parse_edge(&self, record: &csv::StringRecord) -> Option<(usize, usize, f64)> {
        let u = *self.index.get(record.get(0)?)?;
        let v = *self.index.get(record.get(1)?)?;
        let weight = record.get(self.weight_column)?.trim().parse::<f64>().ok()?;
        Some((u, v, weight))
    }
}

fn open(path: &Path) -> Result<csv::Reader<File>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| GraphError::Input {
            path: path.to_path_buf(),
            source,
        })
}

/// A sparse graph loaded from one record file
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: AdjacencyListGraph,
    /// Participant key to vertex index
    pub index: HashMap<String, usize>,
    pub stats: LoadStats,
}

/// Load a record file into the sparse storage
pub fn load_interaction_graph(path: impl AsRef<Path>, weight_column: usize) -> Result<LoadedGraph> {
    let path = path.as_ref();
    log::info!("Loading interaction records from {}", path.display());

    let records = InteractionRecords::scan(path, weight_column)?;
    let mut graph = AdjacencyListGraph::new(records.vertex_count());
    let stats = records.populate(&mut graph)?;

    log::info!(
        "Loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(LoadedGraph {
        graph,
        index: records.index,
        stats,
    })
}
