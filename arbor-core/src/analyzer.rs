//! Orchestration of both MST engines over one graph or a batch.
//!
//! Provides the [`Analyzer`] entry point, which runs Prim and Kruskal,
//! cross-checks their weights and applies the configured policy.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{Span, debug, error, instrument};

use crate::{
    Result,
    builder::{CrossCheckPolicy, ExecutionStrategy},
    compare::{CrossCheck, cross_check},
    error::ArborError,
    graph::Graph,
    mst::{kruskal, prim},
    report::GraphReport,
};

/// Entry point for analysing graphs.
///
/// # Examples
/// ```
/// use arbor_core::{AnalyzerBuilder, Edge, Graph};
///
/// let graphs = vec![
///     Graph::new(1, ["A", "B", "C"], vec![
///         Edge::new("A", "B", 1),
///         Edge::new("B", "C", 2),
///         Edge::new("A", "C", 3),
///     ])?,
///     Graph::new(2, ["X", "Y"], vec![Edge::new("X", "Y", 5)])?,
/// ];
/// let analyzer = AnalyzerBuilder::new().build()?;
/// let reports = analyzer.analyze_batch(&graphs)?;
/// let ids: Vec<u64> = reports.iter().map(|report| report.graph_id()).collect();
/// assert_eq!(ids, vec![1, 2]);
/// assert_eq!(reports[0].prim().total_weight(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    execution_strategy: ExecutionStrategy,
    cross_check: CrossCheckPolicy,
}

impl Analyzer {
    pub(crate) const fn new(
        execution_strategy: ExecutionStrategy,
        cross_check: CrossCheckPolicy,
    ) -> Self {
        Self {
            execution_strategy,
            cross_check,
        }
    }

    /// Returns the execution strategy used for batches.
    #[must_use]
    pub const fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Returns the cross-check policy applied to every graph.
    #[must_use]
    pub const fn cross_check(&self) -> CrossCheckPolicy {
        self.cross_check
    }

    /// Runs both engines on `graph` and cross-checks their weights.
    ///
    /// # Errors
    /// Returns [`ArborError::WeightMismatch`] when both engines span the
    /// graph with different weights and the policy is
    /// [`CrossCheckPolicy::Strict`].
    #[instrument(
        name = "core.analyze",
        err,
        skip(self, graph),
        fields(
            graph_id = graph.id(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            verdict = tracing::field::Empty,
        ),
    )]
    pub fn analyze(&self, graph: &Graph) -> Result<GraphReport> {
        let prim = prim(graph);
        let kruskal = kruskal(graph);
        let outcome = cross_check(&prim, &kruskal);
        Span::current().record("verdict", outcome.verdict());

        if let CrossCheck::Mismatch {
            prim: prim_weight,
            kruskal: kruskal_weight,
        } = outcome
        {
            error!(
                graph_id = graph.id(),
                prim = prim_weight,
                kruskal = kruskal_weight,
                policy = ?self.cross_check,
                "MST weights disagree on a connected graph"
            );
            if self.cross_check == CrossCheckPolicy::Strict {
                return Err(ArborError::WeightMismatch {
                    graph_id: graph.id(),
                    prim: prim_weight,
                    kruskal: kruskal_weight,
                });
            }
        }

        debug!(
            prim_weight = prim.total_weight(),
            kruskal_weight = kruskal.total_weight(),
            "analysis completed"
        );
        Ok(GraphReport::new(
            graph.id(),
            (graph.vertex_count(), graph.edge_count()),
            prim,
            kruskal,
            outcome,
        ))
    }

    /// Analyses every graph, returning reports in input order.
    ///
    /// # Errors
    /// Returns the first error, in input order, raised by
    /// [`Analyzer::analyze`], or [`ArborError::BackendUnavailable`] when a
    /// parallel schedule is requested without the `parallel` feature.
    #[instrument(
        name = "core.analyze_batch",
        err,
        skip(self, graphs),
        fields(graphs = graphs.len(), strategy = ?self.execution_strategy),
    )]
    pub fn analyze_batch(&self, graphs: &[Graph]) -> Result<Vec<GraphReport>> {
        if self.execution_strategy.is_parallel() {
            self.analyze_parallel(graphs)
        } else {
            graphs.iter().map(|graph| self.analyze(graph)).collect()
        }
    }

    #[cfg(feature = "parallel")]
    fn analyze_parallel(&self, graphs: &[Graph]) -> Result<Vec<GraphReport>> {
        let parent = Span::current();
        let outcomes: Vec<Result<GraphReport>> = graphs
            .par_iter()
            .map(|graph| parent.in_scope(|| self.analyze(graph)))
            .collect();
        outcomes.into_iter().collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn analyze_parallel(&self, _graphs: &[Graph]) -> Result<Vec<GraphReport>> {
        Err(ArborError::BackendUnavailable {
            requested: self.execution_strategy,
        })
    }
}
