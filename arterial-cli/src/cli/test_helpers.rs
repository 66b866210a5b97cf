//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use arterial_test_support::tracing::RecordingLayer;
use tempfile::TempDir;
use tracing_subscriber::layer::SubscriberExt;

use super::{Cli, CliError, Command, GraphArgs, OutputFormat, SolveArgs, StrategyArg, run_cli};

/// Matrix of the four-intersection example; its tree weighs 6.
pub(super) const FOUR_INTERSECTIONS: &str = "\
# four intersections
0 2 3 1
2 0 4 5
3 4 0 6
1 5 6 0
";

/// Vertex 3 has no roads at all.
pub(super) const ISOLATED_VERTEX: &str = "\
0 1 4 0
1 0 2 0
4 2 0 0
0 0 0 0
";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_matrix(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn graph_args(vertices: usize, seed: u64) -> GraphArgs {
    GraphArgs {
        vertices,
        seed: Some(seed),
        min_weight: 1,
        max_weight: 20,
    }
}

pub(super) fn solve_cli(path: PathBuf, strategy: StrategyArg) -> Cli {
    Cli {
        format: OutputFormat::Text,
        command: Command::Solve(SolveArgs { path, strategy }),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(summary) => panic!("{panic_msg}: {summary:?}"),
        Err(err) => err,
    }
}

/// Runs `f` with a [`RecordingLayer`] installed as the thread's default
/// subscriber and returns the layer alongside the result.
pub(super) fn with_recording<T>(f: impl FnOnce() -> T) -> (T, RecordingLayer) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, layer)
}
