//! Prim's algorithm over the mirrored adjacency table.
//!
//! The frontier is a min-heap keyed by `(weight, sequence)`, where the
//! sequence is the push order, so equal weights pop in insertion order.
//! Entries whose far endpoint was visited after they were pushed stay in the
//! heap and are discarded when popped.

use std::{cmp::Ordering, cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, instrument};

use crate::graph::{Edge, Graph};

use super::{Algorithm, MstResult, ResultBuilder};

struct FrontierEntry {
    weight: u32,
    sequence: u64,
    target: usize,
    edge: Edge,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_sequence: u64,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    fn push(&mut self, edge: &Edge, target: usize) {
        self.heap.push(Reverse(FrontierEntry {
            weight: edge.weight(),
            sequence: self.next_sequence,
            target,
            edge: edge.clone(),
        }));
        self.next_sequence = self.next_sequence.saturating_add(1);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }
}

/// Computes an MST with Prim's algorithm, starting at the first declared
/// vertex.
///
/// Every heap push, heap pop and visited-set insertion counts as one
/// operation. A graph without vertices yields an empty, connected result.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, prim};
///
/// let graph = Graph::new(
///     2,
///     ["A", "B", "C", "D"],
///     vec![
///         Edge::new("A", "B", 1),
///         Edge::new("A", "C", 4),
///         Edge::new("B", "C", 2),
///         Edge::new("C", "D", 3),
///         Edge::new("B", "D", 5),
///     ],
/// )?;
/// let result = prim(&graph);
/// assert_eq!(result.total_weight(), 6);
/// assert_eq!(result.edge_count(), 3);
/// assert!(result.is_connected());
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.prim",
    level = "debug",
    skip(graph),
    fields(graph_id = graph.id(), vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn prim(graph: &Graph) -> MstResult {
    let vertex_count = graph.vertex_count();
    let mut result = ResultBuilder::start(Algorithm::Prim, vertex_count.saturating_sub(1));
    if vertex_count == 0 {
        return result.finish(true);
    }

    let mut visited = vec![false; vertex_count];
    let mut visited_count = 0_usize;
    let mut frontier = Frontier::new();

    visit(0, &mut visited, &mut visited_count, &mut result);
    push_unvisited(graph, 0, &visited, &mut frontier, &mut result);

    while visited_count < vertex_count {
        let Some(entry) = frontier.pop() else {
            break;
        };
        result.count(1);

        if visited[entry.target] {
            continue;
        }

        visit(entry.target, &mut visited, &mut visited_count, &mut result);
        result.accept(entry.edge);
        push_unvisited(graph, entry.target, &visited, &mut frontier, &mut result);
    }

    let connected = visited_count == vertex_count;
    let mst = result.finish(connected);
    debug!(
        total_weight = mst.total_weight(),
        selected = mst.edge_count(),
        operations = mst.operations(),
        connected,
        stale = frontier.heap.len(),
        "prim completed"
    );
    mst
}

fn visit(
    vertex: usize,
    visited: &mut [bool],
    visited_count: &mut usize,
    result: &mut ResultBuilder,
) {
    visited[vertex] = true;
    *visited_count = visited_count.saturating_add(1);
    result.count(1);
}

fn push_unvisited(
    graph: &Graph,
    vertex: usize,
    visited: &[bool],
    frontier: &mut Frontier,
    result: &mut ResultBuilder,
) {
    let incident = graph.incident(vertex).unwrap_or_default();
    for incidence in incident {
        if !visited[incidence.target_index()] {
            frontier.push(incidence.edge(), incidence.target_index());
            result.count(1);
        }
    }
}
