//! GEXF export for graph visualization tools

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Escape the XML reserved characters in an attribute value
pub fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Write `graph` as a static, directed GEXF document
///
/// Vertices keep their indices as node ids and their labels as-is, so an
/// unlabeled vertex gets `label=""`. Edges are numbered in source order.
pub fn write_gexf<G, W>(graph: &G, writer: &mut W) -> io::Result<()>
where
    G: Graph + ?Sized,
    W: Write,
{
    writeln!(writer, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(writer, "<gexf xmlns=\"http://www.gexf.net/1.2draft\" version=\"1.2\">")?;
    writeln!(writer, "    <meta><creator>interaction-graph-analyzer</creator></meta>")?;
    writeln!(writer, "    <graph mode=\"static\" defaultedgetype=\"directed\">")?;

    writeln!(writer, "        <nodes>")?;
    for v in 0..graph.vertex_count() {
        let label = escape_xml(graph.vertex_label(v));
        writeln!(writer, "            <node id=\"{}\" label=\"{}\" />", v, label)?;
    }
    writeln!(writer, "        </nodes>")?;

    writeln!(writer, "        <edges>")?;
    let mut edge_id = 0;
    for u in 0..graph.vertex_count() {
        for edge in graph.out_edges(u) {
            writeln!(
                writer,
                "            <edge id=\"{}\" source=\"{}\" target=\"{}\" weight=\"{}\" />",
                edge_id, u, edge.target, edge.weight
            )?;
            edge_id += 1;
        }
    }
    writeln!(writer, "        </edges>")?;

    writeln!(writer, "    </graph>")?;
    writeln!(writer, "</gexf>")?;
    writer.flush()
}

/// Export `graph` to a GEXF file at `path`
pub fn export_gexf<G: Graph + ?Sized>(graph: &G, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    log::info!("Exporting graph to {}", path.display());

    let to_export_error = |source: io::Error| GraphError::Export {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_export_error)?;
    let mut writer = BufWriter::new(file);
    write_gexf(graph, &mut writer).map_err(to_export_error)?;

    log::info!(
        "Exported {} nodes and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(())
}
