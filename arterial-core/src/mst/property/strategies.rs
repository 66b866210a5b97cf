//! Graph builders for MST property-based tests.
//!
//! Fixtures are built from a seeded [`SmallRng`] so every proptest failure
//! can be replayed from its seed.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Graph, GraphGenerator, Weight, WeightRange};

use super::types::{MstFixture, Topology};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;

/// Generates fixtures across all topologies, biased towards identical
/// weights because that is where tie-breaking matters.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    let topology = prop_oneof![
        2 => Just(Topology::Complete),
        3 => Just(Topology::ManyIdentical),
        2 => Just(Topology::Sparse),
        2 => Just(Topology::Disconnected),
    ];
    (topology, any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

/// Builds a fixture for an explicitly chosen topology.
pub(super) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> MstFixture {
    let graph = match topology {
        Topology::Complete => generate_complete(rng),
        Topology::ManyIdentical => generate_identical(rng),
        Topology::Sparse => generate_sparse(rng),
        Topology::Disconnected => generate_disconnected(rng),
    };
    MstFixture { graph, topology }
}

fn generate_complete(rng: &mut SmallRng) -> Graph {
    let vertex_count = rng.gen_range(1..=MAX_VERTICES);
    let min = rng.gen_range(1..=50);
    let max = rng.gen_range(min..=min + 50);
    let range = WeightRange::new(min, max).expect("min is positive and <= max");
    GraphGenerator::with_rng(rng)
        .with_weight_range(range)
        .generate(vertex_count)
        .expect("vertex count is positive")
}

fn generate_identical(rng: &mut SmallRng) -> Graph {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<Weight> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    let density: f64 = rng.gen_range(0.3..=1.0);

    let mut edges = Vec::new();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(density) {
                edges.push((left, right, pool[rng.gen_range(0..pool.len())]));
            }
        }
    }
    build(vertex_count, edges)
}

fn generate_sparse(rng: &mut SmallRng) -> Graph {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<(usize, usize, Weight)> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(1..=100)))
        .collect();

    let extra = rng.gen_range(0..=vertex_count);
    for _ in 0..extra {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        if left != right {
            edges.push((left, right, rng.gen_range(1..=100)));
        }
    }
    build(vertex_count, edges)
}

/// Splits a shuffled vertex set into 2-4 components with random internal
/// edges, so vertex `0` may land in any of them.
fn generate_disconnected(rng: &mut SmallRng) -> Graph {
    let component_count = rng.gen_range(2..=4);
    let sizes: Vec<usize> = (0..component_count).map(|_| rng.gen_range(1..=10)).collect();
    let vertex_count: usize = sizes.iter().sum();
    let mut labels: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut labels, rng);

    let mut edges = Vec::new();
    let mut offset = 0;
    for size in sizes {
        let members = &labels[offset..offset + size];
        // A path keeps each component internally connected.
        for pair in members.windows(2) {
            edges.push((pair[0], pair[1], rng.gen_range(1..=20)));
        }
        for (index, &left) in members.iter().enumerate() {
            for &right in &members[index + 1..] {
                if rng.gen_bool(0.4) {
                    edges.push((left, right, rng.gen_range(1..=20)));
                }
            }
        }
        offset += size;
    }
    build(vertex_count, edges)
}

fn build(vertex_count: usize, edges: Vec<(usize, usize, Weight)>) -> Graph {
    Graph::from_edges(vertex_count, edges).expect("generated edges are in range")
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
