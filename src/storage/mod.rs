//! Results persistence module

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{json, to_string_pretty};

use crate::error::Result;
use crate::metrics::GraphReport;

/// Save one graph's report as `<name>_report.json` in `output_dir`
pub fn save_report(report: &GraphReport, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let path = output_dir.join(format!("{}_report.json", report.name));
    log::info!("Saving report for {} to {}", report.name, path.display());

    let mut file = File::create(&path)?;
    file.write_all(to_string_pretty(report)?.as_bytes())?;

    Ok(path)
}

/// Save a side-by-side summary of every analyzed graph
pub fn save_summary(reports: &[GraphReport], output_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let path = output_dir.join("summary.json");
    log::info!("Saving summary of {} graphs", reports.len());

    let summary = json!({
        "graphs": reports.iter().map(|r| {
            json!({
                "name": r.name,
                "vertex_count": r.vertex_count,
                "edge_count": r.edge_count,
                "connected": r.connected,
                "density": r.density,
                "reciprocity": r.reciprocity,
                "weighted_connectivity_index": r.weighted_connectivity_index,
                "closeness": r.closeness,
                "top_influencer": r.top_influence.first().map(|v| v.label.clone()),
            })
        }).collect::<Vec<_>>()
    });

    let mut file = File::create(&path)?;
    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::graph::{AdjacencyListGraph, Graph};

    fn sample_report(name: &str) -> GraphReport {
        let mut graph = AdjacencyListGraph::new(2);
        graph.set_vertex_label(0, "ana");
        graph.set_vertex_label(1, "bruno");
        graph.add_edge(0, 1, 1.0);
        GraphReport::compute(name, &graph, &Config::default())
    }

    #[test]
    fn report_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_report(&sample_report("reviews"), dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), "reviews_report.json");
        let saved: GraphReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.name, "reviews");
        assert_eq!(saved.edge_count, 1);
    }

    #[test]
    fn summary_lists_every_graph() {
        let dir = tempfile::tempdir().unwrap();
        let reports = vec![sample_report("comments"), sample_report("closures")];
        let path = save_summary(&reports, dir.path().join("out")).unwrap();

        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        let graphs = summary["graphs"].as_array().unwrap();
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[1]["name"], "closures");
        assert_eq!(graphs[0]["top_influencer"], "bruno");
    }
}
