//! Kruskal's algorithm with a per-call union-find.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::{
    graph::{Edge, Graph},
    union_find::UnionFind,
};

use super::{Algorithm, MstResult, ResultBuilder};

/// Computes an MST with Kruskal's algorithm.
///
/// Edges are stably sorted by ascending weight, so equal weights are
/// considered in declaration order. Scanning stops once `n - 1` edges are
/// accepted. The operation count sums a synthetic sort estimate
/// (`m * ceil(log2 m)`), one increment per vertex indexed, two per edge
/// scanned, and the union-find's own counter.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, kruskal};
///
/// let graph = Graph::new(
///     1,
///     ["A", "B", "C", "D", "E"],
///     vec![
///         Edge::new("A", "B", 4),
///         Edge::new("A", "C", 3),
///         Edge::new("B", "C", 2),
///         Edge::new("B", "D", 5),
///         Edge::new("C", "D", 7),
///         Edge::new("C", "E", 8),
///         Edge::new("D", "E", 6),
///     ],
/// )?;
/// let result = kruskal(&graph);
/// assert_eq!(result.total_weight(), 16);
/// assert_eq!(result.edge_count(), 4);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.kruskal",
    level = "debug",
    skip(graph),
    fields(graph_id = graph.id(), vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn kruskal(graph: &Graph) -> MstResult {
    let vertex_count = graph.vertex_count();
    let target = vertex_count.saturating_sub(1);
    let mut result = ResultBuilder::start(Algorithm::Kruskal, target);

    let mut sorted: Vec<_> = graph.edges().iter().collect();
    sorted.sort_by_key(|edge| edge.weight());
    result.count(sort_estimate(sorted.len()));

    let mut index: VertexIndex<'_> = HashMap::with_capacity(vertex_count);
    for (position, label) in graph.vertices().iter().enumerate() {
        index.insert(label, position);
        result.count(1);
    }

    let mut sets = UnionFind::new(vertex_count);
    for edge in sorted {
        if result.accepted() >= target {
            break;
        }
        result.count(2);
        let (from, to) = endpoint_indices(&index, edge);
        if sets.union(from, to) {
            result.accept(edge.clone());
        }
    }
    result.count(sets.operations());

    let connected = vertex_count == 0 || result.accepted() == target;
    let mst = result.finish(connected);
    debug!(
        total_weight = mst.total_weight(),
        selected = mst.edge_count(),
        operations = mst.operations(),
        components = sets.components(),
        connected,
        "kruskal completed"
    );
    mst
}

type VertexIndex<'a> = HashMap<&'a str, usize>;

/// Maps both endpoints of `edge` to their dense indices.
///
/// # Panics
/// Panics when an endpoint is missing from `index`. [`Graph::new`] rejects
/// edges with undeclared endpoints, so every edge of a graph resolves.
fn endpoint_indices(index: &VertexIndex<'_>, edge: &Edge) -> (usize, usize) {
    (index[edge.from()], index[edge.to()])
}

/// Synthetic comparison-count estimate for sorting `len` items.
///
/// Counts over the edge count `m`, the number of items actually sorted,
/// rather than the vertex count.
fn sort_estimate(len: usize) -> u64 {
    let items = u64::try_from(len).unwrap_or(u64::MAX);
    if items < 2 {
        return 0;
    }
    let depth = u64::from(items.next_power_of_two().trailing_zeros());
    items.saturating_mul(depth)
}
