use std::{io, path::PathBuf};

use arbor_core::GraphError;
use thiserror::Error;

/// Errors raised while reading or writing JSON documents.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JsonProviderError {
    /// The document is not valid JSON, does not match the expected shape, or
    /// could not be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A graph in the document failed validation.
    #[error("graph #{position} in the document is invalid: {source}")]
    InvalidGraph {
        /// Zero-based position of the graph in the `graphs` array.
        position: usize,
        /// The validation failure.
        #[source]
        source: GraphError,
    },
    /// A file could not be opened, created or written.
    #[error("i/o error on `{path}`: {source}")]
    File {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: io::Error,
    },
    /// Writing to a caller-supplied stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl JsonProviderError {
    /// Returns a stable machine-readable code for the error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Json(_) => "JSON_INVALID_DOCUMENT",
            Self::InvalidGraph { source, .. } => source.code().as_str(),
            Self::File { .. } | Self::Io(_) => "JSON_IO",
        }
    }

    pub(crate) fn file(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::File { path, source }
    }
}
