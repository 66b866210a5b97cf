//! Command-line interface for generating street graphs and solving their
//! minimum spanning trees.
//!
//! `generate` prints a random complete graph, `optimize` additionally runs
//! Prim's algorithm and lays the intersections out on a circle, and `solve`
//! reads a weight matrix from disk so arbitrary (including disconnected)
//! graphs can be fed to the engine.

mod commands;
mod layout;
mod matrix;
mod summary;

pub use commands::{
    Cli, CliError, Command, GraphArgs, OptimizeArgs, SolveArgs, StrategyArg, run_cli,
};
pub use layout::{DEFAULT_RADIUS, VertexPosition, circular_layout};
pub use matrix::parse_matrix;
pub use summary::{
    EdgeSummary, ExecutionSummary, OutputFormat, TreeEdgeSummary, TreeSummary, render_summary,
};

#[cfg(test)]
mod test_helpers;
