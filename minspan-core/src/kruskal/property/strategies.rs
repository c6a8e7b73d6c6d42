//! Graph generation strategies for the spanning forest property tests.
//!
//! Fixtures use dense `usize` vertex identifiers so generated graphs can
//! be handed straight to the builder as `0..vertex_count`. Weights vary
//! by distribution to stress tie-breaking, sparse and disconnected
//! topologies, and the occasional self-loop or parallel edge.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

/// Node count bounds for the general fixture strategy.
const MIN_NODES: usize = 4;
const MAX_NODES: usize = 24;

/// Bounds for the small fixtures fed to the exhaustive minimality
/// oracle; edge counts must stay enumerable (`2^m` subsets).
const ORACLE_MAX_NODES: usize = 6;
const ORACLE_MAX_EDGES: usize = 10;

/// Weight distribution used when generating a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Continuous weights, effectively unique per edge.
    Unique,
    /// A small pool of repeated weights, stressing the input-order
    /// tie-break.
    ManyIdentical,
    /// A random spanning tree plus a few extra edges.
    Sparse,
    /// Several components with no cross edges.
    Disconnected,
}

/// A generated graph plus the distribution that produced it, kept for
/// failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub vertex_count: usize,
    pub edges: Vec<Edge<usize>>,
    pub distribution: WeightDistribution,
}

/// Generates fixtures across all weight distributions, biased towards
/// `ManyIdentical` (the distribution most likely to expose ordering
/// bugs).
pub(super) fn fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (distribution_strategy(), any::<u64>())
        .prop_map(|(distribution, seed)| generate_fixture(distribution, seed))
}

/// Generates small fixtures whose minimality can be checked by
/// enumerating every edge subset.
pub(super) fn small_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    any::<u64>().prop_map(generate_small_fixture)
}

fn distribution_strategy() -> impl Strategy<Value = WeightDistribution> {
    prop_oneof![
        2 => Just(WeightDistribution::Unique),
        3 => Just(WeightDistribution::ManyIdentical),
        2 => Just(WeightDistribution::Sparse),
        2 => Just(WeightDistribution::Disconnected),
    ]
}

/// Generates a fixture for a specific distribution and seed. Also used
/// directly by the rstest-parameterised cases.
pub(super) fn generate_fixture(distribution: WeightDistribution, seed: u64) -> GraphFixture {
    let mut rng = SmallRng::seed_from_u64(seed);
    match distribution {
        WeightDistribution::Unique => generate_unique(&mut rng),
        WeightDistribution::ManyIdentical => generate_identical(&mut rng),
        WeightDistribution::Sparse => generate_sparse(&mut rng),
        WeightDistribution::Disconnected => generate_disconnected(&mut rng),
    }
}

/// Continuous weights drawn from a wide range; collisions are vanishingly
/// rare, so the MST is effectively unique.
fn generate_unique(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let edges = random_pairs(vertex_count, 0.4, rng, |r| r.gen_range(0.1..100.0));
    GraphFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Unique,
    }
}

/// Weights drawn from a pool of one to three values, so large groups of
/// edges tie and the input-order tie-break decides the selection.
fn generate_identical(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let pool: Vec<f64> = (0..rng.gen_range(1..=3))
        .map(|_| f64::from(rng.gen_range(1_u8..=9)))
        .collect();
    let edges = random_pairs(vertex_count, 0.5, rng, move |r| {
        pool[r.gen_range(0..pool.len())]
    });
    GraphFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::ManyIdentical,
    }
}

/// Probabilistically connects every unique vertex pair, occasionally
/// adding a self-loop to confirm the scan never selects one.
fn random_pairs(
    vertex_count: usize,
    probability: f64,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> Vec<Edge<usize>> {
    let mut edges = Vec::new();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push(Edge::new(left, right, w));
            }
        }
    }
    if vertex_count > 0 && rng.gen_bool(0.2) {
        let vertex = rng.gen_range(0..vertex_count);
        let w = weight(rng);
        edges.push(Edge::new(vertex, vertex, w));
    }
    edges
}

/// A random spanning tree over a shuffled vertex order plus roughly
/// `n / 2` extra edges.
fn generate_sparse(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    for index in (1..order.len()).rev() {
        let swap_with = rng.gen_range(0..=index);
        order.swap(index, swap_with);
    }

    let mut edges = Vec::new();
    for pair in order.windows(2) {
        edges.push(Edge::new(pair[0], pair[1], rng.gen_range(0.1..100.0)));
    }
    for _ in 0..vertex_count / 2 {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        edges.push(Edge::new(left, right, rng.gen_range(0.1..100.0)));
    }

    GraphFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

/// Two to four components with random internal edges and no cross edges.
fn generate_disconnected(rng: &mut SmallRng) -> GraphFixture {
    let block_sizes: Vec<usize> = (0..rng.gen_range(2..=4))
        .map(|_| rng.gen_range(2..=7))
        .collect();
    let vertex_count = block_sizes.iter().sum();

    let mut edges = Vec::new();
    let mut offset = 0;
    for &size in &block_sizes {
        for left in 0..size {
            for right in (left + 1)..size {
                if rng.gen_bool(0.6) {
                    edges.push(Edge::new(
                        offset + left,
                        offset + right,
                        rng.gen_range(0.1..100.0),
                    ));
                }
            }
        }
        offset += size;
    }

    GraphFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Small graph with integer weights (so subset sums stay exact), a
/// healthy chance of parallel edges, and occasional self-loops.
fn generate_small_fixture(seed: u64) -> GraphFixture {
    let mut rng = SmallRng::seed_from_u64(seed);
    let vertex_count = rng.gen_range(1..=ORACLE_MAX_NODES);
    let edge_count = rng.gen_range(0..=ORACLE_MAX_EDGES);

    let mut edges = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        let weight = f64::from(rng.gen_range(1_u8..=9));
        edges.push(Edge::new(left, right, weight));
    }

    GraphFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::ManyIdentical,
    }
}
