use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use interaction_graph_analyzer::config::Config;
use interaction_graph_analyzer::data::records::InteractionRecords;
use interaction_graph_analyzer::data::InteractionKind;
use interaction_graph_analyzer::graph::{AdjacencyListGraph, Graph, GraphKind};
use interaction_graph_analyzer::metrics::GraphReport;
use interaction_graph_analyzer::{storage, viz};

#[derive(Parser, Debug)]
#[clap(
    name = "interaction-graph-analyzer",
    about = "Structural metrics for collaboration interaction graphs"
)]
struct Cli {
    /// Directory holding the collected interaction CSV files
    #[clap(long, default_value = "dados_coletados")]
    input_dir: PathBuf,

    /// Output directory for reports and GEXF files
    #[clap(long, default_value = "graph_results")]
    output_dir: PathBuf,

    /// Interaction graphs to analyze (default: all)
    #[clap(long, value_enum, value_delimiter = ',')]
    kinds: Vec<InteractionKind>,

    /// Number of vertices listed in ranked results
    #[clap(long, default_value = "10")]
    top_k: usize,

    /// Damping factor for the influence ranking
    #[clap(long, default_value = "0.85")]
    damping: f64,

    /// Maximum influence ranking iterations
    #[clap(long, default_value = "100")]
    max_iterations: usize,

    /// Convergence tolerance for the influence ranking
    #[clap(long, default_value = "1e-6")]
    tolerance: f64,

    /// Expected density at which the matrix storage is also built
    #[clap(long, default_value = "0.25")]
    dense_threshold: f64,

    /// Skip GEXF export
    #[clap(long)]
    skip_export: bool,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Metric parameters
    let config = Config::new(
        args.damping,
        args.max_iterations,
        args.tolerance,
        args.top_k,
        args.dense_threshold,
    );

    // No --kinds means every interaction file
    let kinds = if args.kinds.is_empty() {
        InteractionKind::ALL.to_vec()
    } else {
        args.kinds.clone()
    };

    log::info!("Starting interaction graph analysis");
    log::info!("Input: {}", args.input_dir.display());
    log::info!("Output: {}", args.output_dir.display());

    // Create output directory
    std::fs::create_dir_all(&args.output_dir)?;

    // A missing or unreadable file only skips its own graph
    let mut reports = Vec::with_capacity(kinds.len());
    for kind in kinds {
        match analyze(kind, &args, &config) {
            Ok(report) => reports.push(report),
            Err(err) => log::error!("Skipping {} graph: {:#}", kind, err),
        }
    }

    // Summary across every analyzed graph
    storage::save_summary(&reports, &args.output_dir)?;

    log::info!(
        "Analysis complete. Results saved to {}",
        args.output_dir.display()
    );

    Ok(())
}

fn analyze(kind: InteractionKind, args: &Cli, config: &Config) -> Result<GraphReport> {
    // 1. Load records into the sparse storage
    let path = args.input_dir.join(kind.file_name());
    log::info!("Loading {} graph from {}", kind, path.display());

    let records = InteractionRecords::scan(&path, kind.weight_column())?;
    let mut graph = AdjacencyListGraph::new(records.vertex_count());
    let stats = records.populate(&mut graph)?;

    log::info!(
        "Loaded {} graph: {} vertices, {} edges from {} rows",
        kind,
        graph.vertex_count(),
        graph.edge_count(),
        stats.rows
    );

    log_sample_participant(&graph);

    // 2. Build the matrix storage too when the graph is dense enough
    let storage_kind = GraphKind::for_expected_density(
        graph.vertex_count(),
        graph.edge_count(),
        config.dense_threshold,
    );
    if storage_kind == GraphKind::Dense {
        let mut dense = storage_kind.build(records.vertex_count());
        records.populate(dense.as_mut())?;
        log::info!(
            "{} graph is dense; matrix storage reports connected = {}",
            kind,
            dense.is_connected()
        );
    }

    // 3. Compute metrics
    let report = GraphReport::compute(kind.name(), &graph, config);
    log_report(&report);

    // 4. Save report
    storage::save_report(&report, &args.output_dir)?;

    // 5. Export for visualization if requested
    if !args.skip_export {
        export(&graph, &args.output_dir, kind);
    }

    Ok(report)
}

fn log_sample_participant(graph: &AdjacencyListGraph) {
    if graph.vertex_count() == 0 {
        return;
    }
    log::info!(
        "Sample participant '{}' (id 0): in-degree {}, out-degree {}",
        graph.vertex_label(0),
        graph.in_degree(0),
        graph.out_degree(0)
    );
}

fn log_report(report: &GraphReport) {
    log::info!("Connected (weakly): {}", report.connected);
    log::info!("Density: {:.6}", report.density);
    log::info!("Reciprocity: {:.6}", report.reciprocity);
    log::info!(
        "Weighted connectivity index: {:.6}",
        report.weighted_connectivity_index
    );
    log::info!("Closeness: {:.6}", report.closeness);
    log::info!(
        "Influence ranking: {} iterations (converged: {})",
        report.influence_iterations,
        report.influence_converged
    );
    for (position, vertex) in report.top_influence.iter().enumerate() {
        log::info!(
            "  #{} {} (id {}): {:.6}",
            position + 1,
            vertex.label,
            vertex.index,
            vertex.score
        );
    }
}

fn export(graph: &AdjacencyListGraph, output_dir: &Path, kind: InteractionKind) {
    let path = output_dir.join(format!("gephi_{}.gexf", kind.name()));
    // Export failures are reported but never abort the run
    if let Err(err) = viz::export_gexf(graph, &path) {
        log::error!("{}", err);
    }
}
