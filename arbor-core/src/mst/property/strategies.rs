//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Each generator emits `(source, target,
//! weight)` triples over dense vertex indices with strictly positive
//! integer weights.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs (kept smaller to avoid quadratic
/// edge explosion).
const DENSE_MAX_VERTICES: usize = 24;
/// Upper bound for random weights outside the identical-weight pools.
const MAX_WEIGHT: u32 = 1_000;

/// Generates MST fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

// ── Probabilistic graph helper ──────────────────────────────────────────

/// Parameters that vary between the probabilistic generators.
struct ProbabilisticGraphConfig {
    /// Upper bound for the random vertex count (inclusive).
    max_vertices: usize,
    /// Inclusive range from which the per-pair edge probability is sampled.
    edge_prob_range: (f64, f64),
    /// Weight distribution label for the resulting fixture.
    distribution: WeightDistribution,
}

/// Adds each unordered vertex pair with a sampled probability, weighting
/// edges with the caller-supplied generator.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    config: ProbabilisticGraphConfig,
    mut weight_generator: impl FnMut(&mut SmallRng) -> u32,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=config.max_vertices);
    let edge_probability: f64 = rng.gen_range(config.edge_prob_range.0..=config.edge_prob_range.1);
    let mut builder = EdgeBuilder::default();

    for (source, target) in all_pairs(0, vertex_count) {
        if rng.gen_bool(edge_probability) {
            let weight = weight_generator(rng);
            builder.push(source, target, weight);
        }
    }

    if builder.edges.is_empty() {
        let weight = weight_generator(rng);
        builder.push(0, 1, weight);
    }

    MstFixture {
        vertex_count,
        edges: builder.edges,
        distribution: config.distribution,
    }
}

// ── Unique weights ──────────────────────────────────────────────────────

/// Generates a graph where every edge has a distinct weight, drawn without
/// replacement from `1..=pairs`.
fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    let mut fixture = generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.2, 0.6),
            distribution: WeightDistribution::Unique,
        },
        |_| 1,
    );

    let mut weights: Vec<u32> = (1..).take(fixture.edges.len()).collect();
    shuffle(&mut weights, rng);
    for (edge, weight) in fixture.edges.iter_mut().zip(weights) {
        edge.2 = weight;
    }
    fixture
}

// ── Many identical weights ──────────────────────────────────────────────

/// Generates a graph where large groups of edges share the same weight.
///
/// Ties are where the engines' ordering policies diverge, so this is the
/// main stress case for the weight-equality cross-check.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let weight_pool_size = rng.gen_range(1..=3);
    let weight_pool: Vec<u32> = (0..weight_pool_size)
        .map(|_| rng.gen_range(1_u32..=10))
        .collect();

    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.3, 0.7),
            distribution: WeightDistribution::ManyIdentical,
        },
        move |r| weight_pool[r.gen_range(0..weight_pool.len())],
    )
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Generates a sparse graph by first building a random spanning tree
/// (guaranteeing connectivity) and then adding a small number of extra
/// edges.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut builder = EdgeBuilder::default();

    let mut perm: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut perm, rng);
    for pair in perm.windows(2) {
        let weight = rng.gen_range(1..=MAX_WEIGHT);
        builder.push(pair[0], pair[1], weight);
    }

    let extra_count = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..vertex_count);
        let j = rng.gen_range(0..vertex_count);
        if i != j {
            let weight = rng.gen_range(1..=MAX_WEIGHT);
            builder.push(i, j, weight);
        }
    }

    MstFixture {
        vertex_count,
        edges: builder.edges,
        distribution: WeightDistribution::Sparse,
    }
}

// ── Dense ───────────────────────────────────────────────────────────────

/// Generates a dense graph approaching a complete graph.
fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: DENSE_MAX_VERTICES,
            edge_prob_range: (0.7, 0.95),
            distribution: WeightDistribution::Dense,
        },
        |r| r.gen_range(1..=MAX_WEIGHT),
    )
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Generates a graph with 2-5 components, each with random internal
/// structure. No cross-component edges are created; singleton components
/// are allowed.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let component_sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let vertex_count: usize = component_sizes.iter().sum();
    let mut builder = EdgeBuilder::default();
    let mut offset = 0;

    for &size in &component_sizes {
        builder.generate_component(offset, size, rng);
        offset += size;
    }

    MstFixture {
        vertex_count,
        edges: builder.edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Accumulates generated edges.
#[derive(Default)]
struct EdgeBuilder {
    edges: Vec<(usize, usize, u32)>,
}

impl EdgeBuilder {
    fn push(&mut self, source: usize, target: usize, weight: u32) {
        self.edges.push((source, target, weight));
    }

    /// Generates a connected component: a random path through the members
    /// plus probabilistic extra edges.
    fn generate_component(&mut self, offset: usize, size: usize, rng: &mut SmallRng) {
        for member in 1..size {
            let weight = rng.gen_range(1..=MAX_WEIGHT);
            let anchor = offset + rng.gen_range(0..member);
            self.push(anchor, offset + member, weight);
        }

        let edge_probability: f64 = rng.gen_range(0.1..=0.5);
        for (source, target) in all_pairs(offset, size) {
            if rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(1..=MAX_WEIGHT);
                self.push(source, target, weight);
            }
        }
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Returns all unique undirected pairs `(offset + i, offset + j)` where
/// `i < j < size`.
fn all_pairs(offset: usize, size: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            pairs.push((offset + i, offset + j));
        }
    }
    pairs
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Biased towards `ManyIdentical`, where the two engines' tie-breaking
// policies differ the most.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
