//! Benchmark parameter types.

use std::fmt;

/// Parameters for a single-graph engine benchmark.
#[derive(Clone, Debug)]
pub struct EngineBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Mean number of incident edges per vertex.
    pub average_degree: usize,
}

impl fmt::Display for EngineBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},deg={}", self.vertex_count, self.average_degree)
    }
}

/// Parameters for a batch analysis benchmark.
#[derive(Clone, Debug)]
pub struct BatchBenchParams {
    /// Number of graphs in the batch.
    pub graph_count: usize,
    /// Number of vertices in each graph.
    pub vertex_count: usize,
}

impl fmt::Display for BatchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graphs={},n={}", self.graph_count, self.vertex_count)
    }
}
