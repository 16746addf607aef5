//! Error types surfaced by the analyzer

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can escape the graph engine.
///
/// Out-of-range vertex indices, self-loops and malformed input rows are not
/// errors: the graph absorbs them and the loader counts them.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A record file could not be opened or read
    #[error("failed to read interaction records from {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Writing the visualization document failed
    #[error("failed to export graph to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A serialized graph violates the storage invariants
    #[error("invalid graph document: {0}")]
    InvalidGraph(String),

    /// Writing a report file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a report failed
    #[error("failed to encode report: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
