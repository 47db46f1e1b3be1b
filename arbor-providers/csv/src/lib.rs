//! CSV summary provider.
//!
//! Writes one row per analysed graph with both engines' cost, time,
//! operation count and connectivity, either to any writer or to a file that
//! can be appended to across runs.

mod errors;
mod summary;

pub use errors::CsvProviderError;
pub use summary::{SUMMARY_HEADER, SummaryRow, write_summary, write_summary_to_path};
