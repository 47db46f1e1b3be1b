//! JSON provider for graph batches and MST result documents.
//!
//! Reads `{ "graphs": [...] }` input documents into validated
//! [`arbor_core::Graph`] values, writes `{ "results": [...] }` output
//! documents from [`arbor_core::GraphReport`]s, and produces the two-graph
//! sample input.

mod document;
mod errors;
mod load;
mod results;
mod sample;

pub use document::{EdgeRecord, GraphDocument, GraphRecord};
pub use errors::JsonProviderError;
pub use load::{load_graphs_from_path, load_graphs_from_reader, parse_graphs};
pub use results::{
    AlgorithmRecord, InputStats, ResultRecord, ResultsDocument, write_results,
    write_results_to_path,
};
pub use sample::{sample_document, write_sample};
