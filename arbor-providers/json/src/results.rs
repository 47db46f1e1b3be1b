//! Serialising analysis reports into the results document.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use arbor_core::{GraphReport, MstResult};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{document::EdgeRecord, errors::JsonProviderError};

/// Top-level output document.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResultsDocument {
    /// One entry per analysed graph, in input order.
    pub results: Vec<ResultRecord>,
}

/// Both engines' results for one graph.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResultRecord {
    /// Identifier of the analysed graph.
    pub graph_id: u64,
    /// Size of the analysed graph.
    pub input_stats: InputStats,
    /// Prim's result.
    pub prim: AlgorithmRecord,
    /// Kruskal's result.
    pub kruskal: AlgorithmRecord,
}

/// Vertex and edge counts of an analysed graph.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct InputStats {
    /// Number of declared vertices.
    pub vertices: usize,
    /// Number of declared edges.
    pub edges: usize,
}

/// One engine's result.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AlgorithmRecord {
    /// Selected edges in selection order.
    pub mst_edges: Vec<EdgeRecord>,
    /// Sum of the selected weights.
    pub total_cost: u64,
    /// Informational operation count.
    pub operations_count: u64,
    /// Wall-clock time in whole milliseconds.
    pub execution_time_ms: u64,
    /// Whether the selected edges span every vertex.
    pub connected: bool,
}

impl From<&MstResult> for AlgorithmRecord {
    fn from(result: &MstResult) -> Self {
        Self {
            mst_edges: result.edges().iter().map(EdgeRecord::from).collect(),
            total_cost: result.total_weight(),
            operations_count: result.operations(),
            execution_time_ms: result.elapsed_ms(),
            connected: result.is_connected(),
        }
    }
}

impl From<&GraphReport> for ResultRecord {
    fn from(report: &GraphReport) -> Self {
        Self {
            graph_id: report.graph_id(),
            input_stats: InputStats {
                vertices: report.vertex_count(),
                edges: report.edge_count(),
            },
            prim: AlgorithmRecord::from(report.prim()),
            kruskal: AlgorithmRecord::from(report.kruskal()),
        }
    }
}

impl ResultsDocument {
    /// Builds the document for `reports`, preserving their order.
    #[must_use]
    pub fn from_reports(reports: &[GraphReport]) -> Self {
        Self {
            results: reports.iter().map(ResultRecord::from).collect(),
        }
    }
}

/// Writes the pretty-printed results document for `reports` to `writer`.
///
/// # Errors
/// Returns [`JsonProviderError::Json`] if serialisation fails and
/// [`JsonProviderError::Io`] if the writer rejects the output.
pub fn write_results<W: Write>(
    reports: &[GraphReport],
    mut writer: W,
) -> Result<(), JsonProviderError> {
    serde_json::to_writer_pretty(&mut writer, &ResultsDocument::from_reports(reports))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Creates or truncates `path` and writes the results document into it.
///
/// # Errors
/// Returns [`JsonProviderError::File`] when the file cannot be created or
/// written, and otherwise the errors described for [`write_results`].
#[instrument(
    name = "json.write_results",
    err,
    skip(reports, path),
    fields(path = %path.as_ref().display(), graphs = reports.len()),
)]
pub fn write_results_to_path(
    reports: &[GraphReport],
    path: impl AsRef<Path>,
) -> Result<(), JsonProviderError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(JsonProviderError::file(path))?;
    write_results(reports, BufWriter::new(file)).map_err(|err| match err {
        JsonProviderError::Io(source) => JsonProviderError::File {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    info!("results written");
    Ok(())
}
