//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of using
//! `.expect()`.

use arbor_core::ArborError;

use crate::source::GenerateError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Generate(#[from] GenerateError),
    /// Building or running the analyzer failed.
    #[error("analysis failed: {0}")]
    Analysis(#[from] ArborError),
}
