//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random spanning tree over all
//! vertices is laid down first, then extra edges are added until the
//! requested average degree is reached.

use arbor_core::{Edge, Graph, GraphError};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Largest weight drawn for a synthetic edge.
const MAX_WEIGHT: u32 = 10_000;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// Fewer than two vertices were requested.
    #[error("vertex count must be at least 2, got {0}")]
    TooFewVertices(usize),
    /// The requested average degree was zero.
    #[error("average degree must be greater than zero")]
    ZeroDegree,
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Mean number of incident edges per vertex.
    pub average_degree: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl SyntheticConfig {
    /// Returns the number of edges a graph built from this configuration
    /// will declare.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let spanning = self.vertex_count.saturating_sub(1);
        let requested = self.vertex_count.saturating_mul(self.average_degree) >> 1_u32;
        spanning.max(requested)
    }
}

/// Generates a connected graph with the given identifier.
///
/// Vertices are labelled `v0`, `v1`, and so on. Parallel edges are possible
/// for dense configurations; self-loops are never generated.
///
/// # Errors
///
/// Returns [`GenerateError::Synthetic`] if the configuration is degenerate,
/// or [`GenerateError::Graph`] if validation rejects the generated graph.
///
/// # Examples
///
/// ```
/// use arbor_benches::source::{SyntheticConfig, generate_graph};
///
/// let config = SyntheticConfig { vertex_count: 10, average_degree: 4, seed: 42 };
/// let graph = generate_graph(1, &config).expect("valid config");
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 20);
/// ```
pub fn generate_graph(id: u64, config: &SyntheticConfig) -> Result<Graph, GenerateError> {
    if config.vertex_count < 2 {
        return Err(SyntheticError::TooFewVertices(config.vertex_count).into());
    }
    if config.average_degree == 0 {
        return Err(SyntheticError::ZeroDegree.into());
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let labels: Vec<String> = (0..config.vertex_count).map(|v| format!("v{v}")).collect();
    let mut edges = Vec::with_capacity(config.edge_count());

    for member in 1..config.vertex_count {
        let anchor = rng.gen_range(0..member);
        edges.push(edge(&labels, anchor, member, &mut rng)?);
    }
    while edges.len() < config.edge_count() {
        let from = rng.gen_range(0..config.vertex_count);
        let to = rng.gen_range(0..config.vertex_count);
        if from != to {
            edges.push(edge(&labels, from, to, &mut rng)?);
        }
    }

    Ok(Graph::new(id, labels.iter().map(String::as_str), edges)?)
}

fn edge(
    labels: &[String],
    from: usize,
    to: usize,
    rng: &mut SmallRng,
) -> Result<Edge, GenerateError> {
    let (Some(from_label), Some(to_label)) = (labels.get(from), labels.get(to)) else {
        return Err(SyntheticError::TooFewVertices(labels.len()).into());
    };
    Ok(Edge::new(
        from_label.as_str(),
        to_label.as_str(),
        rng.gen_range(1..=MAX_WEIGHT),
    ))
}

/// Errors raised by [`generate_graph`].
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerateError {
    /// The configuration was rejected.
    #[error(transparent)]
    Synthetic(#[from] SyntheticError),
    /// The generated graph failed validation.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
