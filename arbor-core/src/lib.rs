//! Arbor core library.
//!
//! Computes minimum spanning trees with two independent engines, Prim's and
//! Kruskal's algorithms, and cross-checks their total weights. Graphs are
//! validated on construction through [`Graph::new`]; [`AnalyzerBuilder`]
//! configures an [`Analyzer`] that runs both engines over one graph or a
//! batch and returns one [`GraphReport`] per graph.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analyzer;
mod builder;
mod compare;
mod error;
mod graph;
mod mst;
mod report;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    analyzer::Analyzer,
    builder::{AnalyzerBuilder, CrossCheckPolicy, ExecutionStrategy},
    compare::{CrossCheck, cross_check},
    error::{ArborError, ArborErrorCode, GraphError, GraphErrorCode, Result},
    graph::{Edge, Graph, Incidence},
    mst::{Algorithm, MstResult, kruskal, prim},
    report::GraphReport,
    union_find::UnionFind,
};
