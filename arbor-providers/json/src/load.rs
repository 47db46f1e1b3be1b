//! Loading graph batches from JSON.

use std::{fs::File, io::BufReader, io::Read, path::Path};

use arbor_core::Graph;
use tracing::{debug, instrument};

use crate::{document::GraphDocument, errors::JsonProviderError};

/// Parses a graph document held in memory.
///
/// # Errors
/// Returns [`JsonProviderError::Json`] for invalid JSON and
/// [`JsonProviderError::InvalidGraph`] for the first graph that fails
/// validation.
///
/// # Examples
/// ```
/// use arbor_providers_json::parse_graphs;
///
/// let graphs = parse_graphs(
///     r#"{"graphs":[{"id":7,"nodes":["A","B"],"edges":[{"from":"A","to":"B","weight":2}]}]}"#,
/// )?;
/// assert_eq!(graphs.len(), 1);
/// assert_eq!(graphs[0].id(), 7);
/// # Ok::<(), arbor_providers_json::JsonProviderError>(())
/// ```
pub fn parse_graphs(content: &str) -> Result<Vec<Graph>, JsonProviderError> {
    let document: GraphDocument = serde_json::from_str(content)?;
    validate(&document)
}

/// Reads and validates a graph document from `reader`.
///
/// # Errors
/// See [`parse_graphs`].
pub fn load_graphs_from_reader<R: Read>(reader: R) -> Result<Vec<Graph>, JsonProviderError> {
    let document: GraphDocument = serde_json::from_reader(reader)?;
    validate(&document)
}

/// Reads and validates the graph document stored at `path`.
///
/// # Errors
/// Returns [`JsonProviderError::File`] when the file cannot be opened, and
/// otherwise the errors described for [`parse_graphs`].
#[instrument(name = "json.load", err, skip(path), fields(path = %path.as_ref().display()))]
pub fn load_graphs_from_path(path: impl AsRef<Path>) -> Result<Vec<Graph>, JsonProviderError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(JsonProviderError::file(path))?;
    load_graphs_from_reader(BufReader::new(file))
}

fn validate(document: &GraphDocument) -> Result<Vec<Graph>, JsonProviderError> {
    let graphs = document
        .graphs
        .iter()
        .enumerate()
        .map(|(position, record)| {
            record
                .to_graph()
                .map_err(|source| JsonProviderError::InvalidGraph { position, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(graphs = graphs.len(), "graph document loaded");
    Ok(graphs)
}
