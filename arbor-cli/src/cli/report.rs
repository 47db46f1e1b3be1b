//! Console rendering of command outcomes.

use std::{
    io::{self, Write},
    time::Duration,
};

use arbor_core::{Algorithm, CrossCheck, GraphReport, MstResult};

use super::commands::{AnalysisSummary, ExecutionSummary};

/// Selected edges are listed individually up to this many.
const EDGE_LISTING_LIMIT: usize = 10;

/// Renders `summary` to `writer` as a human-readable report.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{ExecutionSummary, render_summary};
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::SampleWritten { path: "input.json".into() };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "Created sample input file: input.json\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::SampleWritten { path } => {
            writeln!(writer, "Created sample input file: {}", path.display())
        }
        ExecutionSummary::Analysis(analysis) => render_analysis(analysis, &mut writer),
    }
}

fn render_analysis(analysis: &AnalysisSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "=== MST Analysis ===")?;
    if analysis.sample_created {
        writeln!(
            writer,
            "Created sample input file: {}",
            analysis.input.display()
        )?;
    }
    writeln!(
        writer,
        "Loaded {} graphs from {}",
        analysis.reports.len(),
        analysis.input.display()
    )?;

    for report in &analysis.reports {
        render_graph(report, writer)?;
    }

    writeln!(writer)?;
    writeln!(writer, "Results saved to {}", analysis.output.display())?;
    if let Some(csv) = &analysis.csv {
        writeln!(writer, "Summary saved to {}", csv.display())?;
    }

    render_table(&analysis.reports, writer)?;
    render_performance(&analysis.reports, writer)
}

fn render_graph(report: &GraphReport, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "--- Graph {} ---", report.graph_id())?;
    writeln!(
        writer,
        "Vertices: {}, Edges: {}",
        report.vertex_count(),
        report.edge_count()
    )?;
    for result in report.results() {
        render_result(result, writer)?;
    }
    match report.cross_check() {
        CrossCheck::Agreed { weight } => writeln!(
            writer,
            "CORRECT: both algorithms found an MST with cost {weight}"
        ),
        CrossCheck::Mismatch { prim, kruskal } => writeln!(
            writer,
            "ERROR: MST costs differ! Prim: {prim}, Kruskal: {kruskal}"
        ),
        CrossCheck::Skipped {
            prim_connected,
            kruskal_connected,
        } => writeln!(
            writer,
            "SKIPPED: graph is not connected (prim connected: {prim_connected}, kruskal connected: {kruskal_connected})"
        ),
    }
}

fn render_result(result: &MstResult, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "{}:", result.algorithm())?;
    writeln!(writer, "  MST Cost: {}", result.total_weight())?;
    writeln!(writer, "  Execution Time: {:?}", result.elapsed())?;
    writeln!(writer, "  Operations: {}", result.operations())?;
    writeln!(writer, "  MST Edges: {}", result.edge_count())?;
    if !result.is_connected() {
        writeln!(writer, "  Connected: false")?;
    }
    if result.edge_count() <= EDGE_LISTING_LIMIT {
        for edge in result.edges() {
            writeln!(writer, "    {edge}")?;
        }
    }
    Ok(())
}

fn render_table(reports: &[GraphReport], writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "=== FINAL SUMMARY ===")?;
    writeln!(
        writer,
        "Graph ID | Vertices | Edges |    Prim Time | Kruskal Time | Prim Ops | Kruskal Ops | MST Cost | Check"
    )?;
    writeln!(
        writer,
        "---------|----------|-------|--------------|--------------|----------|-------------|----------|--------"
    )?;
    for report in reports {
        let prim = report.prim();
        let kruskal = report.kruskal();
        writeln!(
            writer,
            "{:>8} | {:>8} | {:>5} | {:>12} | {:>12} | {:>8} | {:>11} | {:>8} | {}",
            report.graph_id(),
            report.vertex_count(),
            report.edge_count(),
            format!("{:?}", prim.elapsed()),
            format!("{:?}", kruskal.elapsed()),
            prim.operations(),
            kruskal.operations(),
            prim.total_weight(),
            short_verdict(report.cross_check()),
        )?;
    }
    Ok(())
}

const fn short_verdict(outcome: CrossCheck) -> &'static str {
    match outcome {
        CrossCheck::Agreed { .. } => "ok",
        CrossCheck::Skipped { .. } => "skipped",
        CrossCheck::Mismatch { .. } => "MISMATCH",
    }
}

/// Totals for one engine across the batch.
#[derive(Default)]
struct Totals {
    elapsed: Duration,
    operations: u64,
}

impl Totals {
    fn collect(reports: &[GraphReport], algorithm: Algorithm) -> Self {
        reports
            .iter()
            .flat_map(GraphReport::results)
            .filter(|result| result.algorithm() == algorithm)
            .fold(Self::default(), |totals, result| Self {
                elapsed: totals.elapsed.saturating_add(result.elapsed()),
                operations: totals.operations.saturating_add(result.operations()),
            })
    }
}

fn render_performance(reports: &[GraphReport], writer: &mut impl Write) -> io::Result<()> {
    let prim = Totals::collect(reports, Algorithm::Prim);
    let kruskal = Totals::collect(reports, Algorithm::Kruskal);

    writeln!(writer)?;
    writeln!(writer, "=== PERFORMANCE ANALYSIS ===")?;
    writeln!(writer, "Total Prim Time: {:?}", prim.elapsed)?;
    writeln!(writer, "Total Kruskal Time: {:?}", kruskal.elapsed)?;
    writeln!(writer, "Total Prim Operations: {}", prim.operations)?;
    writeln!(writer, "Total Kruskal Operations: {}", kruskal.operations)?;
    let verdict = match prim.elapsed.cmp(&kruskal.elapsed) {
        std::cmp::Ordering::Less => "Prim was faster overall",
        std::cmp::Ordering::Greater => "Kruskal was faster overall",
        std::cmp::Ordering::Equal => "Both algorithms performed equally",
    };
    writeln!(writer, "{verdict}")
}
