//! Core library for the interaction graph analyzer

pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod storage;
pub mod viz;

pub use error::{GraphError, Result};
pub use graph::{AdjacencyListGraph, AdjacencyMatrixGraph, Graph, GraphKind};
