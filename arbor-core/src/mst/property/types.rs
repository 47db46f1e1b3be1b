//! Type definitions for MST property-based tests.
//!
//! Provides the fixture, configuration, and weight distribution types used
//! by the graph generation strategies and property functions.

use crate::{Edge, Graph};

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different aspects of the engines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a distinct weight, so the MST is unique.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Sparse graph with approximately `1.5n` to `2n` edges.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Captures the vertex count, generated edges as `(source, target, weight)`
/// index triples, and the weight distribution used during generation.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated edges over dense vertex indices.
    pub edges: Vec<(usize, usize, u32)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Label assigned to the vertex at `index`.
    pub(super) fn label(index: usize) -> String {
        format!("v{index}")
    }

    /// Builds the validated [`Graph`] described by the fixture.
    pub(super) fn to_graph(&self) -> Graph {
        let vertices = (0..self.vertex_count).map(Self::label);
        let edges = self
            .edges
            .iter()
            .map(|&(source, target, weight)| {
                Edge::new(Self::label(source), Self::label(target), weight)
            });
        match Graph::new(0, vertices, edges) {
            Ok(graph) => graph,
            Err(err) => panic!("generated fixture must validate: {err} ({self:?})"),
        }
    }
}

/// Configuration for the idempotence property.
///
/// Controls how many times each engine is re-executed on the same input.
pub(super) struct RepetitionConfig {
    /// Number of times to repeat the MST computation per input.
    pub repetitions: usize,
}

impl RepetitionConfig {
    /// Loads the configuration from environment variables, falling back to
    /// sensible defaults.
    ///
    /// The environment variable `ARBOR_MST_PBT_REPS` controls the repetition
    /// count (default: 5).
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("ARBOR_MST_PBT_REPS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        Self { repetitions }
    }
}
