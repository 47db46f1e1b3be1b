//! Cross-checking of Prim and Kruskal results on the same graph.

use crate::mst::MstResult;

/// Outcome of comparing both engines' results on one graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CrossCheck {
    /// Both engines spanned the graph with the same total weight.
    Agreed {
        /// The shared MST weight.
        weight: u64,
    },
    /// At least one engine did not span the graph, so weights are not
    /// comparable.
    Skipped {
        /// Whether Prim reported a spanning tree.
        prim_connected: bool,
        /// Whether Kruskal reported a spanning tree.
        kruskal_connected: bool,
    },
    /// Both engines spanned the graph but their weights differ.
    Mismatch {
        /// Total weight reported by Prim.
        prim: u64,
        /// Total weight reported by Kruskal.
        kruskal: u64,
    },
}

impl CrossCheck {
    /// Returns `true` for [`CrossCheck::Mismatch`].
    #[must_use]
    pub const fn is_mismatch(self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }

    /// Returns the console verdict label.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Agreed { .. } => "CORRECT",
            Self::Skipped { .. } => "SKIPPED (graph not connected)",
            Self::Mismatch { .. } => "ERROR",
        }
    }
}

/// Compares Prim's and Kruskal's results for the same graph.
///
/// Weights are only compared when both results report a spanning tree.
///
/// # Examples
/// ```
/// use arbor_core::{CrossCheck, Edge, Graph, cross_check, kruskal, prim};
///
/// let graph = Graph::new(1, ["A", "B", "C"], vec![
///     Edge::new("A", "B", 2),
///     Edge::new("B", "C", 1),
///     Edge::new("A", "C", 5),
/// ])?;
/// let outcome = cross_check(&prim(&graph), &kruskal(&graph));
/// assert_eq!(outcome, CrossCheck::Agreed { weight: 3 });
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
pub const fn cross_check(prim: &MstResult, kruskal: &MstResult) -> CrossCheck {
    if !(prim.is_connected() && kruskal.is_connected()) {
        return CrossCheck::Skipped {
            prim_connected: prim.is_connected(),
            kruskal_connected: kruskal.is_connected(),
        };
    }
    if prim.total_weight() == kruskal.total_weight() {
        CrossCheck::Agreed {
            weight: prim.total_weight(),
        }
    } else {
        CrossCheck::Mismatch {
            prim: prim.total_weight(),
            kruskal: kruskal.total_weight(),
        }
    }
}
