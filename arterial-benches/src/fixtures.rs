//! Seeded graph fixtures for benchmarks.
//!
//! Complete graphs match what the generator produces for the CLI. Sparse
//! graphs (a random spanning path plus a few extra roads per vertex) leave
//! most matrix entries at `0`, which is where the heap strategy can skip
//! work that the linear scan cannot.

use arterial_core::{Graph, GraphGenerator, Weight};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

const SPARSE_MAX_WEIGHT: Weight = 100;

/// Generates a complete graph with default weights.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when `vertex_count == 0`.
pub fn complete_graph(vertex_count: usize, seed: u64) -> Result<Graph, BenchSetupError> {
    Ok(GraphGenerator::from_seed(seed).generate(vertex_count)?)
}

/// Generates a connected sparse graph with roughly `extra_per_vertex`
/// additional edges per vertex on top of a spanning path.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count == 0`.
pub fn sparse_graph(
    vertex_count: usize,
    extra_per_vertex: usize,
    seed: u64,
) -> Result<Graph, BenchSetupError> {
    if vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges: Vec<(usize, usize, Weight)> = (1..vertex_count)
        .map(|vertex| (vertex - 1, vertex, rng.gen_range(1..=SPARSE_MAX_WEIGHT)))
        .collect();
    for _ in 0..vertex_count.saturating_mul(extra_per_vertex) {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        if left != right {
            edges.push((left, right, rng.gen_range(1..=SPARSE_MAX_WEIGHT)));
        }
    }
    Ok(Graph::from_edges(vertex_count, edges)?)
}
