//! Command-line interface orchestration for arbor.
//!
//! `run` loads a JSON graph batch, analyses every graph with both MST
//! engines, writes the JSON results and an optional CSV summary, and hands
//! back an [`ExecutionSummary`] for [`render_summary`]. `sample` writes the
//! bundled sample input.

mod commands;
mod report;

pub use commands::{
    AnalysisSummary, Cli, CliError, Command, CrossCheckArg, ExecutionSummary, RunCommand,
    SampleCommand, StrategyArg, run_cli,
};
pub use report::render_summary;
