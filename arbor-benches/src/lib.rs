//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for the Prim and Kruskal engines and for batch
//! analysis.

pub mod error;
pub mod params;
pub mod source;
