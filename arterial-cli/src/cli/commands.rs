//! Argument parsing and command execution for the `arterial` CLI.

use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use arterial_core::{
    Graph, GraphError, GraphErrorCode, GraphGenerator, MstEngine, SelectionStrategy, Weight,
    WeightRange,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use super::layout::{DEFAULT_RADIUS, circular_layout};
use super::matrix::parse_matrix;
use super::summary::{ExecutionSummary, OutputFormat};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arterial",
    about = "Generate street graphs and connect every intersection at minimum cost."
)]
pub struct Cli {
    /// Output encoding for the command result.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a random complete graph and print it.
    Generate(GraphArgs),
    /// Generate a random graph, compute its minimum spanning tree and lay it out.
    Optimize(OptimizeArgs),
    /// Compute the minimum spanning tree of a weight matrix read from a file.
    Solve(SolveArgs),
}

impl Command {
    /// Returns the subcommand name as typed on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Generate(_) => "generate",
            Self::Optimize(_) => "optimize",
            Self::Solve(_) => "solve",
        }
    }
}

/// Options controlling random graph generation.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Number of intersections.
    #[arg(long, short = 'n')]
    pub vertices: usize,

    /// Seed for reproducible graphs; omitted means a fresh random graph.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Smallest edge weight (inclusive, at least 1).
    #[arg(long = "min-weight", default_value_t = WeightRange::DEFAULT_MIN)]
    pub min_weight: Weight,

    /// Largest edge weight (inclusive).
    #[arg(long = "max-weight", default_value_t = WeightRange::DEFAULT_MAX)]
    pub max_weight: Weight,
}

/// Options accepted by the `optimize` command.
#[derive(Debug, Args, Clone)]
pub struct OptimizeArgs {
    /// Graph generation options.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Radius of the circle intersections are placed on.
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    pub radius: f64,

    /// How Prim's algorithm picks the next vertex.
    #[arg(long, value_enum, default_value_t = StrategyArg::LinearScan)]
    pub strategy: StrategyArg,
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveArgs {
    /// Text file holding a square, whitespace-separated weight matrix.
    pub path: PathBuf,

    /// How Prim's algorithm picks the next vertex.
    #[arg(long, value_enum, default_value_t = StrategyArg::LinearScan)]
    pub strategy: StrategyArg,
}

/// Command-line spelling of [`SelectionStrategy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Scan all vertices on every step.
    #[default]
    LinearScan,
    /// Track candidates in a binary heap.
    BinaryHeap,
}

impl From<StrategyArg> for SelectionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::LinearScan => Self::LinearScan,
            StrategyArg::BinaryHeap => Self::BinaryHeap,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading an input file failed.
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A matrix entry was not a non-negative integer weight.
    #[error("{}:{line}:{column}: invalid weight `{token}`: {source}", path.display())]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// 1-based column of the token's first byte.
        column: usize,
        /// Offending token.
        token: String,
        /// Integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The matrix file contained no rows.
    #[error("`{}` contains no matrix rows", path.display())]
    EmptyMatrix {
        /// File that was empty.
        path: PathBuf,
    },
    /// The layout radius was not a positive finite number.
    #[error("radius must be a positive finite number (got {radius})")]
    InvalidRadius {
        /// Rejected radius.
        radius: f64,
    },
    /// Graph construction or generation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Returns the stable code of the underlying graph error, if any.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(err) => Some(err.code()),
            _ => None,
        }
    }
}

/// Executes the command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when input cannot be read or parsed, or when the
/// requested graph is invalid.
///
/// # Examples
/// ```
/// # use arterial_cli::cli::{Cli, Command, GraphArgs, OutputFormat, run_cli};
/// let cli = Cli {
///     format: OutputFormat::Text,
///     command: Command::Generate(GraphArgs {
///         vertices: 4,
///         seed: Some(7),
///         min_weight: 1,
///         max_weight: 20,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.vertex_count, 4);
/// assert_eq!(summary.edges.len(), 6);
/// # Ok::<(), arterial_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = cli.command.name()))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(args) => run_generate(&args),
        Command::Optimize(args) => run_optimize(&args),
        Command::Solve(args) => run_solve(&args),
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(args),
    fields(vertices = args.vertices, seed = field::Empty),
)]
pub(super) fn run_generate(args: &GraphArgs) -> Result<ExecutionSummary, CliError> {
    let graph = generate_graph(args)?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph generated"
    );
    Ok(ExecutionSummary::from_graph("generate", &graph))
}

#[instrument(
    name = "cli.optimize",
    err,
    skip(args),
    fields(vertices = args.graph.vertices, seed = field::Empty, radius = args.radius),
)]
pub(super) fn run_optimize(args: &OptimizeArgs) -> Result<ExecutionSummary, CliError> {
    if !(args.radius.is_finite() && args.radius > 0.0) {
        return Err(CliError::InvalidRadius {
            radius: args.radius,
        });
    }
    let graph = generate_graph(&args.graph)?;
    let summary = solve_graph("optimize", &graph, args.strategy.into());
    Ok(summary.with_layout(circular_layout(graph.vertex_count(), args.radius)))
}

#[instrument(name = "cli.solve", err, skip(args), fields(path = %args.path.display()))]
pub(super) fn run_solve(args: &SolveArgs) -> Result<ExecutionSummary, CliError> {
    let graph = read_matrix(&args.path)?;
    Ok(solve_graph("solve", &graph, args.strategy.into()))
}

/// Builds a generator from `args`, recording the effective seed on the
/// current span so unseeded runs can be replayed.
fn generate_graph(args: &GraphArgs) -> Result<Graph, CliError> {
    let range = WeightRange::new(args.min_weight, args.max_weight)?;
    let generator = match args.seed {
        Some(seed) => {
            Span::current().record("seed", seed);
            GraphGenerator::from_seed(seed)
        }
        None => GraphGenerator::from_entropy(),
    };
    Ok(generator
        .with_weight_range(range)
        .generate(args.vertices)?)
}

fn solve_graph(
    command: &'static str,
    graph: &Graph,
    strategy: SelectionStrategy,
) -> ExecutionSummary {
    let tree = MstEngine::new().with_strategy(strategy).compute(graph);
    if tree.is_spanning() {
        info!(
            edges = tree.len(),
            total_weight = tree.total_weight(),
            "minimum spanning tree computed"
        );
    } else {
        warn!(
            reached = tree.reached_count(),
            vertices = graph.vertex_count(),
            unreached = ?tree.unreached(),
            "graph is disconnected; tree covers only the component of vertex 0"
        );
    }
    ExecutionSummary::from_graph(command, graph).with_tree(&tree, strategy)
}

#[instrument(name = "cli.read_matrix", err, skip(path), fields(path = %path.display()))]
pub(super) fn read_matrix(path: &Path) -> Result<Graph, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_matrix(path, &text)
}
