//! Per-graph analysis reports.

use crate::{compare::CrossCheck, mst::MstResult};

/// Both engines' results on one graph plus their cross-check outcome.
///
/// # Examples
/// ```
/// use arbor_core::{AnalyzerBuilder, CrossCheck, Edge, Graph};
///
/// let graph = Graph::new(4, ["A", "B"], vec![Edge::new("A", "B", 7)])?;
/// let report = AnalyzerBuilder::new().build()?.analyze(&graph)?;
/// assert_eq!(report.graph_id(), 4);
/// assert_eq!(report.vertex_count(), 2);
/// assert_eq!(report.cross_check(), CrossCheck::Agreed { weight: 7 });
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphReport {
    graph_id: u64,
    vertex_count: usize,
    edge_count: usize,
    prim: MstResult,
    kruskal: MstResult,
    cross_check: CrossCheck,
}

impl GraphReport {
    pub(crate) fn new(
        graph_id: u64,
        (vertex_count, edge_count): (usize, usize),
        prim: MstResult,
        kruskal: MstResult,
        cross_check: CrossCheck,
    ) -> Self {
        Self {
            graph_id,
            vertex_count,
            edge_count,
            prim,
            kruskal,
            cross_check,
        }
    }

    /// Returns the analysed graph's identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph_id(&self) -> u64 { self.graph_id }

    /// Returns the number of declared vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of declared edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns Prim's result.
    #[must_use]
    #[rustfmt::skip]
    pub const fn prim(&self) -> &MstResult { &self.prim }

    /// Returns Kruskal's result.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kruskal(&self) -> &MstResult { &self.kruskal }

    /// Returns the cross-check outcome.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cross_check(&self) -> CrossCheck { self.cross_check }

    /// Returns both results in reporting order.
    #[must_use]
    pub fn results(&self) -> [&MstResult; 2] {
        [&self.prim, &self.kruskal]
    }
}
