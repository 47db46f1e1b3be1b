use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while writing the CSV summary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CsvProviderError {
    /// The CSV writer failed to encode or emit a record.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// The summary file could not be opened or flushed.
    #[error("i/o error on `{path}`: {source}")]
    File {
        /// The summary file.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: io::Error,
    },
    /// Flushing a caller-supplied writer failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl CsvProviderError {
    /// Returns a stable machine-readable code for the error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Csv(_) => "CSV_WRITE",
            Self::File { .. } | Self::Io(_) => "CSV_IO",
        }
    }
}
