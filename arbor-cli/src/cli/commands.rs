//! Command implementations and argument parsing for the arbor CLI.

use std::path::PathBuf;

use arbor_core::{AnalyzerBuilder, ArborError, CrossCheckPolicy, ExecutionStrategy, GraphReport};
use arbor_providers_csv::{CsvProviderError, write_summary_to_path};
use arbor_providers_json::{
    JsonProviderError, load_graphs_from_path, write_results_to_path, write_sample,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Compute and cross-check minimum spanning trees with Prim's and Kruskal's algorithms."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Analyse every graph in a JSON input document.
    Run(RunCommand),
    /// Write the sample input document.
    Sample(SampleCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// JSON input document; the sample is written here first if it is
    /// missing.
    #[arg(default_value = "input.json")]
    pub input: PathBuf,

    /// Destination of the JSON results document.
    #[arg(long, default_value = "output.json")]
    pub output: PathBuf,

    /// Also write a CSV summary to this path.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Append to the CSV summary instead of replacing it.
    #[arg(long, requires = "csv")]
    pub append: bool,

    /// How independent graphs are scheduled.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,

    /// What to do when both engines span a graph with different weights.
    #[arg(long = "cross-check", value_enum, default_value_t = CrossCheckArg::Strict)]
    pub cross_check: CrossCheckArg,
}

/// Options accepted by the `sample` command.
#[derive(Debug, Args, Clone)]
pub struct SampleCommand {
    /// Destination of the sample document.
    #[arg(default_value = "input.json")]
    pub path: PathBuf,
}

/// Batch scheduling choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Parallel when available, sequential otherwise.
    Auto,
    /// One graph at a time.
    Sequential,
    /// Graphs analysed concurrently.
    Parallel,
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Sequential => Self::Sequential,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Cross-check policy choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CrossCheckArg {
    /// Fail the run on a weight mismatch.
    Strict,
    /// Log the mismatch and keep going.
    Report,
}

impl From<CrossCheckArg> for CrossCheckPolicy {
    fn from(arg: CrossCheckArg) -> Self {
        match arg {
            CrossCheckArg::Strict => Self::Strict,
            CrossCheckArg::Report => Self::Report,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the input or writing the results document failed.
    #[error(transparent)]
    Json(#[from] JsonProviderError),
    /// Writing the CSV summary failed.
    #[error(transparent)]
    Csv(#[from] CsvProviderError),
    /// Analysis failed.
    #[error(transparent)]
    Core(#[from] ArborError),
}

impl CliError {
    /// Returns the stable code of the underlying error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Json(err) => err.code(),
            Self::Csv(err) => err.code(),
            Self::Core(err) => err.code().as_str(),
        }
    }
}

/// Outcome of a `run` command.
#[derive(Debug, Clone)]
pub struct AnalysisSummary {
    /// Input document that was analysed.
    pub input: PathBuf,
    /// Whether the input was missing and the sample was written in its place.
    pub sample_created: bool,
    /// Destination of the JSON results document.
    pub output: PathBuf,
    /// Destination of the CSV summary, when one was requested.
    pub csv: Option<PathBuf>,
    /// One report per graph, in input order.
    pub reports: Vec<GraphReport>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// A batch was analysed.
    Analysis(AnalysisSummary),
    /// The sample document was written.
    SampleWritten {
        /// Destination of the sample.
        path: PathBuf,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, analysis or output fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, ExecutionSummary, SampleCommand, run_cli};
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("input.json");
/// let cli = Cli {
///     command: Command::Sample(SampleCommand { path: path.clone() }),
/// };
/// assert!(matches!(run_cli(cli)?, ExecutionSummary::SampleWritten { .. }));
/// assert!(path.exists());
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(run).map(ExecutionSummary::Analysis)
        }
        Command::Sample(SampleCommand { path }) => {
            span.record("command", field::display("sample"));
            write_sample(&path)?;
            Ok(ExecutionSummary::SampleWritten { path })
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        input = %command.input.display(),
        strategy = ?command.strategy,
        cross_check = ?command.cross_check,
        graphs = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<AnalysisSummary, CliError> {
    let analyzer = AnalyzerBuilder::new()
        .with_execution_strategy(command.strategy.into())
        .with_cross_check(command.cross_check.into())
        .build()?;

    let sample_created = !command.input.exists();
    if sample_created {
        info!(path = %command.input.display(), "input missing; writing sample document");
        write_sample(&command.input)?;
    }

    let graphs = load_graphs_from_path(&command.input)?;
    Span::current().record("graphs", graphs.len());
    let reports = analyzer.analyze_batch(&graphs)?;

    write_results_to_path(&reports, &command.output)?;
    if let Some(csv) = &command.csv {
        write_summary_to_path(&reports, csv, command.append)?;
    }

    info!(
        graphs = reports.len(),
        mismatches = reports
            .iter()
            .filter(|report| report.cross_check().is_mismatch())
            .count(),
        "command completed"
    );
    Ok(AnalysisSummary {
        input: command.input,
        sample_created,
        output: command.output,
        csv: command.csv,
        reports,
    })
}
