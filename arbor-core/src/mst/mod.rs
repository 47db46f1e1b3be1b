//! Minimum spanning tree (MST) engines.
//!
//! Two independent sequential engines compute an MST over a [`Graph`]:
//! [`prim`] grows a tree from the first declared vertex with a lazy-deletion
//! binary heap, and [`kruskal`] scans globally sorted edges and rejects
//! cycles with a [`crate::UnionFind`]. Both are read-only on the graph, own
//! their scratch state, and report an [`MstResult`] carrying the selected
//! edges, the total weight, an operation count and the elapsed time.
//!
//! Disconnected graphs are not an error: each engine returns the edges it
//! could select and clears the `connected` flag.

mod kruskal;
mod prim;

use std::{
    fmt,
    time::{Duration, Instant},
};

use crate::graph::{Edge, Graph};

pub use self::{kruskal::kruskal, prim::prim};

/// Identifies an MST engine.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Prim's algorithm with a binary-heap frontier.
    Prim,
    /// Kruskal's algorithm with union-find cycle detection.
    Kruskal,
}

impl Algorithm {
    /// Both engines in reporting order.
    pub const ALL: [Self; 2] = [Self::Prim, Self::Kruskal];

    /// Returns the lowercase identifier used in logs and serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }

    /// Returns the human-readable engine name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Prim => "Prim",
            Self::Kruskal => "Kruskal",
        }
    }

    /// Runs this engine against `graph`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Algorithm, Edge, Graph};
    ///
    /// let graph = Graph::new(1, ["A", "B"], vec![Edge::new("A", "B", 3)])?;
    /// for algorithm in Algorithm::ALL {
    ///     let result = algorithm.run(&graph);
    ///     assert_eq!(result.algorithm(), algorithm);
    ///     assert_eq!(result.total_weight(), 3);
    /// }
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn run(self, graph: &Graph) -> MstResult {
        match self {
            Self::Prim => prim(graph),
            Self::Kruskal => kruskal(graph),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The output of one MST engine on one graph.
///
/// When `connected` is `false` the edges form a spanning-forest fragment
/// rather than a tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MstResult {
    algorithm: Algorithm,
    edges: Vec<Edge>,
    total_weight: u64,
    operations: u64,
    elapsed: Duration,
    connected: bool,
}

impl MstResult {
    /// Returns the engine that produced the result.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the selected edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> &[Edge] { self.edges.as_slice() }

    /// Returns the number of selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> u64 { self.total_weight }

    /// Returns the informational operation count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn operations(&self) -> u64 { self.operations }

    /// Returns the wall-clock time spent inside the engine.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the elapsed time in whole milliseconds, saturating at
    /// `u64::MAX`.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }

    /// Returns `true` when the selected edges span every vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_connected(&self) -> bool { self.connected }
}

/// Accumulates an engine's output before the result is sealed.
struct ResultBuilder {
    algorithm: Algorithm,
    started: Instant,
    edges: Vec<Edge>,
    total_weight: u64,
    operations: u64,
}

impl ResultBuilder {
    fn start(algorithm: Algorithm, capacity: usize) -> Self {
        Self {
            algorithm,
            started: Instant::now(),
            edges: Vec::with_capacity(capacity),
            total_weight: 0,
            operations: 0,
        }
    }

    fn accept(&mut self, edge: Edge) {
        self.total_weight = self.total_weight.saturating_add(u64::from(edge.weight()));
        self.edges.push(edge);
    }

    const fn count(&mut self, operations: u64) {
        self.operations = self.operations.saturating_add(operations);
    }

    const fn accepted(&self) -> usize {
        self.edges.len()
    }

    fn finish(self, connected: bool) -> MstResult {
        MstResult {
            algorithm: self.algorithm,
            edges: self.edges,
            total_weight: self.total_weight,
            operations: self.operations,
            elapsed: self.started.elapsed(),
            connected,
        }
    }
}
