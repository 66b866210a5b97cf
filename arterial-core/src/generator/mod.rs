//! Random complete-graph generation.
//!
//! Every unordered vertex pair receives a weight drawn uniformly from a
//! [`WeightRange`], so generated graphs are always connected. Seeding the
//! generator makes the output reproducible.

use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::debug;

use crate::{Graph, GraphError, Result, Weight};

/// Inclusive range of weights assigned to generated edges.
///
/// The lower bound must be at least `1` because `0` marks a missing edge.
///
/// # Examples
/// ```
/// use arterial_core::WeightRange;
///
/// let range = WeightRange::new(5, 9)?;
/// assert_eq!((range.min(), range.max()), (5, 9));
/// assert!(WeightRange::new(0, 9).is_err());
/// # Ok::<(), arterial_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightRange {
    min: Weight,
    max: Weight,
}

impl WeightRange {
    /// Lower bound of the default range.
    pub const DEFAULT_MIN: Weight = 1;
    /// Upper bound of the default range.
    pub const DEFAULT_MAX: Weight = 20;

    /// Creates a validated range.
    ///
    /// # Errors
    /// Returns [`GraphError::ZeroMinimumWeight`] when `min == 0` and
    /// [`GraphError::EmptyWeightRange`] when `min > max`.
    pub const fn new(min: Weight, max: Weight) -> Result<Self> {
        if min == 0 {
            return Err(GraphError::ZeroMinimumWeight);
        }
        if min > max {
            return Err(GraphError::EmptyWeightRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    #[rustfmt::skip]
    pub const fn min(&self) -> Weight { self.min }

    /// Returns the inclusive upper bound.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max(&self) -> Weight { self.max }

    /// Returns `true` when `weight` lies inside the range.
    #[must_use]
    pub const fn contains(&self, weight: Weight) -> bool {
        self.min <= weight && weight <= self.max
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// Produces random complete graphs.
///
/// # Examples
/// ```
/// use arterial_core::GraphGenerator;
///
/// let mut generator = GraphGenerator::from_seed(7);
/// let graph = generator.generate(5)?;
/// assert_eq!(graph.vertex_count(), 5);
/// assert_eq!(graph.edge_count(), 10);
/// # Ok::<(), arterial_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GraphGenerator<R = SmallRng> {
    rng: R,
    weights: WeightRange,
}

impl GraphGenerator<SmallRng> {
    /// Creates a reproducible generator seeded with `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }
}

impl<R: Rng> GraphGenerator<R> {
    /// Wraps an existing random number generator using the default weights.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            weights: WeightRange::default(),
        }
    }

    /// Overrides the range edge weights are drawn from.
    #[must_use]
    pub fn with_weight_range(mut self, weights: WeightRange) -> Self {
        self.weights = weights;
        self
    }

    /// Returns the configured weight range.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight_range(&self) -> WeightRange { self.weights }

    /// Generates a complete graph over `vertex_count` vertices.
    ///
    /// Pairs are visited in row-major order `(0, 1), (0, 2), ..., (1, 2), ...`
    /// so a fixed seed always yields the same matrix.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexCount`] when `vertex_count == 0`
    /// and [`GraphError::TooManyVertices`] when the matrix cannot be
    /// allocated.
    pub fn generate(&mut self, vertex_count: usize) -> Result<Graph> {
        let mut graph = Graph::unconnected(vertex_count)?;
        let sampler = Uniform::new_inclusive(self.weights.min, self.weights.max);
        for left in 0..vertex_count {
            for right in (left + 1)..vertex_count {
                let weight = sampler.sample(&mut self.rng);
                graph.set_symmetric(left, right, weight);
            }
        }

        debug!(
            vertex_count,
            edge_count = vertex_count * (vertex_count - 1) / 2,
            min_weight = self.weights.min,
            max_weight = self.weights.max,
            "generated complete graph"
        );
        Ok(graph)
    }
}
