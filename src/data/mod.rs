//! Interaction record loading

pub mod records;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use records::{load_interaction_graph, InteractionRecords, LoadStats, LoadedGraph};

/// The interaction files produced by the collector, each with its own layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// `source, target, kind, weight, issue`
    Comments,
    /// `source, target, weight, issue`
    Closures,
    /// `source, target, action, weight, pull_request`
    Reviews,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 3] = [
        InteractionKind::Comments,
        InteractionKind::Closures,
        InteractionKind::Reviews,
    ];

    /// File name the collector writes for this kind
    pub fn file_name(self) -> &'static str {
        match self {
            InteractionKind::Comments => "grafo_1_comentarios.csv",
            InteractionKind::Closures => "grafo_2_fechamentos.csv",
            InteractionKind::Reviews => "grafo_3_pr_reviews.csv",
        }
    }

    /// Zero-based column holding the edge weight
    pub fn weight_column(self) -> usize {
        match self {
            InteractionKind::Comments => 3,
            InteractionKind::Closures => 2,
            InteractionKind::Reviews => 3,
        }
    }

    /// Short name used for output files
    pub fn name(self) -> &'static str {
        match self {
            InteractionKind::Comments => "comments",
            InteractionKind::Closures => "closures",
            InteractionKind::Reviews => "reviews",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
