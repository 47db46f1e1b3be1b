//! Summary rows and writers.

use std::{fs::OpenOptions, io::Write, path::Path};

use arbor_core::GraphReport;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::errors::CsvProviderError;

/// Column names of the summary, in order.
pub const SUMMARY_HEADER: [&str; 11] = [
    "graph_id",
    "vertices",
    "edges",
    "prim_cost",
    "prim_time_ms",
    "prim_ops",
    "prim_connected",
    "kruskal_cost",
    "kruskal_time_ms",
    "kruskal_ops",
    "kruskal_connected",
];

/// One summary row; field order matches [`SUMMARY_HEADER`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// Identifier of the analysed graph.
    pub graph_id: u64,
    /// Number of declared vertices.
    pub vertices: usize,
    /// Number of declared edges.
    pub edges: usize,
    /// Prim's total weight.
    pub prim_cost: u64,
    /// Prim's elapsed time in whole milliseconds.
    pub prim_time_ms: u64,
    /// Prim's operation count.
    pub prim_ops: u64,
    /// Whether Prim spanned the graph.
    pub prim_connected: bool,
    /// Kruskal's total weight.
    pub kruskal_cost: u64,
    /// Kruskal's elapsed time in whole milliseconds.
    pub kruskal_time_ms: u64,
    /// Kruskal's operation count.
    pub kruskal_ops: u64,
    /// Whether Kruskal spanned the graph.
    pub kruskal_connected: bool,
}

impl From<&GraphReport> for SummaryRow {
    fn from(report: &GraphReport) -> Self {
        let prim = report.prim();
        let kruskal = report.kruskal();
        Self {
            graph_id: report.graph_id(),
            vertices: report.vertex_count(),
            edges: report.edge_count(),
            prim_cost: prim.total_weight(),
            prim_time_ms: prim.elapsed_ms(),
            prim_ops: prim.operations(),
            prim_connected: prim.is_connected(),
            kruskal_cost: kruskal.total_weight(),
            kruskal_time_ms: kruskal.elapsed_ms(),
            kruskal_ops: kruskal.operations(),
            kruskal_connected: kruskal.is_connected(),
        }
    }
}

/// Writes one row per report to `writer`, preceded by the header when
/// `include_header` is set.
///
/// # Errors
/// Returns [`CsvProviderError::Csv`] when a record cannot be written and
/// [`CsvProviderError::Io`] when the final flush fails.
///
/// # Examples
/// ```
/// use arbor_core::{AnalyzerBuilder, Edge, Graph};
/// use arbor_providers_csv::write_summary;
///
/// let graph = Graph::new(1, ["A", "B"], vec![Edge::new("A", "B", 3)])?;
/// let report = AnalyzerBuilder::new().build()?.analyze(&graph)?;
/// let mut out = Vec::new();
/// write_summary(&[report], &mut out, true)?;
/// let text = String::from_utf8(out)?;
/// assert!(text.starts_with("graph_id,vertices,edges,prim_cost"));
/// assert_eq!(text.lines().count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_summary<W: Write>(
    reports: &[GraphReport],
    writer: W,
    include_header: bool,
) -> Result<(), CsvProviderError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    if include_header {
        csv.write_record(SUMMARY_HEADER)?;
    }
    for report in reports {
        csv.serialize(SummaryRow::from(report))?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes the summary to `path`.
///
/// With `append` set, rows are added to the end of an existing file and the
/// header is only written when the file is new. Otherwise the file is
/// truncated and always starts with the header.
///
/// # Errors
/// Returns [`CsvProviderError::File`] when the file cannot be opened or
/// flushed, and otherwise the errors described for [`write_summary`].
#[instrument(
    name = "csv.write_summary",
    err,
    skip(reports, path),
    fields(path = %path.as_ref().display(), rows = reports.len(), append),
)]
pub fn write_summary_to_path(
    reports: &[GraphReport],
    path: impl AsRef<Path>,
    append: bool,
) -> Result<(), CsvProviderError> {
    let path = path.as_ref();
    let include_header = !append || !path.exists();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(|source| CsvProviderError::File {
            path: path.to_path_buf(),
            source,
        })?;
    write_summary(reports, file, include_header).map_err(|err| match err {
        CsvProviderError::Io(source) => CsvProviderError::File {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    debug!(include_header, "summary written");
    Ok(())
}
