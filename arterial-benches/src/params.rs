//! Benchmark parameter labels.

use std::fmt;

use arterial_core::SelectionStrategy;

/// Parameters for a Prim benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct PrimBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Vertex selection strategy under test.
    pub strategy: SelectionStrategy,
}

impl fmt::Display for PrimBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.vertex_count, self.strategy.as_str())
    }
}

/// Parameters for a graph generation benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GenerateBenchParams {
    /// Number of vertices generated.
    pub vertex_count: usize,
}

impl fmt::Display for GenerateBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.vertex_count)
    }
}
