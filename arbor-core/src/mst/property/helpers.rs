//! Shared helper functions for MST property-based tests.

use proptest::test_runner::TestCaseError;

use crate::{Edge, Graph};

/// Path-halving find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Sums edge weights without relying on the engine's own accumulator.
pub(super) fn total_weight(edges: &[Edge]) -> u64 {
    edges.iter().map(|edge| u64::from(edge.weight())).sum()
}

/// Resolves both endpoints of `edge` to dense indices in `graph`.
pub(super) fn endpoints(graph: &Graph, edge: &Edge) -> Result<(usize, usize), TestCaseError> {
    let resolve = |label: &str| {
        graph.index_of(label).ok_or_else(|| {
            TestCaseError::fail(format!("selected edge {edge} names unknown vertex {label}"))
        })
    };
    Ok((resolve(edge.from())?, resolve(edge.to())?))
}
