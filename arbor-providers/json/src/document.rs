//! Serde mirror of the input document.

use arbor_core::{Edge, Graph, GraphError};
use serde::{Deserialize, Serialize};

/// Top-level input document holding a batch of graphs.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct GraphDocument {
    /// Graphs in processing order.
    pub graphs: Vec<GraphRecord>,
}

/// One graph as it appears in the input document.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GraphRecord {
    /// Caller-assigned graph identifier.
    pub id: u64,
    /// Vertex labels in declaration order.
    pub nodes: Vec<String>,
    /// Undirected weighted edges in declaration order.
    pub edges: Vec<EdgeRecord>,
}

/// One edge as it appears in input and output documents.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct EdgeRecord {
    /// First endpoint label.
    pub from: String,
    /// Second endpoint label.
    pub to: String,
    /// Positive integer weight.
    pub weight: u32,
}

impl EdgeRecord {
    /// Creates an edge record.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl From<&Edge> for EdgeRecord {
    fn from(edge: &Edge) -> Self {
        Self::new(edge.from(), edge.to(), edge.weight())
    }
}

impl GraphRecord {
    /// Validates the record into a [`Graph`].
    ///
    /// # Errors
    /// Propagates the [`GraphError`] raised by [`Graph::new`].
    pub fn to_graph(&self) -> Result<Graph, GraphError> {
        let edges = self
            .edges
            .iter()
            .map(|edge| Edge::new(edge.from.as_str(), edge.to.as_str(), edge.weight));
        Graph::new(self.id, self.nodes.iter().map(String::as_str), edges)
    }
}
