//! The bundled two-graph sample input.

use std::{fs::File, io::BufWriter, io::Write, path::Path};

use tracing::{info, instrument};

use crate::{
    document::{EdgeRecord, GraphDocument, GraphRecord},
    errors::JsonProviderError,
};

/// Returns the sample document: a five-vertex graph with MST weight 16 and a
/// four-vertex graph with MST weight 6.
///
/// # Examples
/// ```
/// use arbor_providers_json::sample_document;
///
/// let sample = sample_document();
/// assert_eq!(sample.graphs.len(), 2);
/// assert!(sample.graphs.iter().all(|graph| graph.to_graph().is_ok()));
/// ```
#[must_use]
pub fn sample_document() -> GraphDocument {
    GraphDocument {
        graphs: vec![
            record(
                1,
                &["A", "B", "C", "D", "E"],
                &[
                    ("A", "B", 4),
                    ("A", "C", 3),
                    ("B", "C", 2),
                    ("B", "D", 5),
                    ("C", "D", 7),
                    ("C", "E", 8),
                    ("D", "E", 6),
                ],
            ),
            record(
                2,
                &["A", "B", "C", "D"],
                &[
                    ("A", "B", 1),
                    ("A", "C", 4),
                    ("B", "C", 2),
                    ("C", "D", 3),
                    ("B", "D", 5),
                ],
            ),
        ],
    }
}

fn record(id: u64, nodes: &[&str], edges: &[(&str, &str, u32)]) -> GraphRecord {
    GraphRecord {
        id,
        nodes: nodes.iter().map(|&node| node.to_owned()).collect(),
        edges: edges
            .iter()
            .map(|&(from, to, weight)| EdgeRecord::new(from, to, weight))
            .collect(),
    }
}

/// Writes the pretty-printed sample document to `path`, replacing any
/// existing file.
///
/// # Errors
/// Returns [`JsonProviderError::File`] when the file cannot be created or
/// written.
#[instrument(name = "json.write_sample", err, skip(path), fields(path = %path.as_ref().display()))]
pub fn write_sample(path: impl AsRef<Path>) -> Result<(), JsonProviderError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(JsonProviderError::file(path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &sample_document())?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(JsonProviderError::file(path))?;
    info!("sample input written");
    Ok(())
}
