//! Command results and their text or JSON rendering.

use std::io::{self, Write};

use arterial_core::{Graph, SelectionStrategy, SpanningTree, Weight};
use clap::ValueEnum;
use serde::Serialize;

use super::layout::VertexPosition;

/// Output encoding for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented, human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// One undirected graph edge, flagged when the spanning tree uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeSummary {
    /// Lower endpoint.
    pub source: usize,
    /// Higher endpoint.
    pub target: usize,
    /// Edge weight.
    pub weight: Weight,
    /// Whether the edge belongs to the computed tree.
    pub in_tree: bool,
}

/// One edge of the computed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeEdgeSummary {
    /// Vertex already in the tree when the edge was chosen.
    pub parent: usize,
    /// Vertex attached by the edge.
    pub child: usize,
    /// Edge weight.
    pub weight: Weight,
}

/// Outcome of running Prim's algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeSummary {
    /// Selection strategy the engine used.
    pub strategy: &'static str,
    /// Tree edges ordered by child vertex.
    pub edges: Vec<TreeEdgeSummary>,
    /// Sum of tree edge weights.
    pub total_weight: u64,
    /// Whether every vertex was reached.
    pub spanning: bool,
    /// Vertices the tree could not reach.
    pub unreached: Vec<usize>,
}

/// Everything a command produced, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionSummary {
    /// Name of the command that ran.
    pub command: &'static str,
    /// Number of intersections.
    pub vertex_count: usize,
    /// Every edge of the graph in row-major order.
    pub edges: Vec<EdgeSummary>,
    /// Spanning tree, present for `optimize` and `solve`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<TreeSummary>,
    /// Vertex positions, present for `optimize`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub layout: Vec<VertexPosition>,
}

impl ExecutionSummary {
    /// Summarises `graph` without a tree or layout.
    #[must_use]
    pub fn from_graph(command: &'static str, graph: &Graph) -> Self {
        let edges = graph
            .edges()
            .map(|(source, target, weight)| EdgeSummary {
                source,
                target,
                weight,
                in_tree: false,
            })
            .collect();
        Self {
            command,
            vertex_count: graph.vertex_count(),
            edges,
            tree: None,
            layout: Vec::new(),
        }
    }

    /// Attaches `tree` and flags the graph edges it uses.
    #[must_use]
    pub fn with_tree(mut self, tree: &SpanningTree, strategy: SelectionStrategy) -> Self {
        for edge in &mut self.edges {
            edge.in_tree = tree.contains(edge.source, edge.target);
        }
        self.tree = Some(TreeSummary {
            strategy: strategy.as_str(),
            edges: tree
                .edges()
                .iter()
                .map(|edge| TreeEdgeSummary {
                    parent: edge.parent(),
                    child: edge.child(),
                    weight: edge.weight(),
                })
                .collect(),
            total_weight: tree.total_weight(),
            spanning: tree.is_spanning(),
            unreached: tree.unreached(),
        });
        self
    }

    /// Attaches vertex positions.
    #[must_use]
    pub fn with_layout(mut self, layout: Vec<VertexPosition>) -> Self {
        self.layout = layout;
        self
    }
}

/// Writes `summary` to `writer` in the requested format.
///
/// # Errors
/// Returns [`io::Error`] if writing fails or JSON encoding fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arterial_cli::cli::{ExecutionSummary, OutputFormat, render_summary};
/// # use arterial_core::{Graph, SelectionStrategy, compute_mst};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::from_edges(3, [(0, 1, 4), (1, 2, 1), (0, 2, 2)])?;
/// let summary = ExecutionSummary::from_graph("solve", &graph)
///     .with_tree(&compute_mst(&graph), SelectionStrategy::LinearScan);
/// let mut buffer = Vec::new();
/// render_summary(&summary, OutputFormat::Text, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("1-2 1 *"));
/// assert!(text.contains("total weight: 3"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(
    summary: &ExecutionSummary,
    format: OutputFormat,
    mut writer: impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(summary, writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, summary)?;
            writeln!(writer)
        }
    }
}

fn render_text(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    writeln!(writer, "edges: {}", summary.edges.len())?;
    for edge in &summary.edges {
        let marker = if edge.in_tree { " *" } else { "" };
        writeln!(
            writer,
            "  {}-{} {}{marker}",
            edge.source, edge.target, edge.weight
        )?;
    }

    if let Some(tree) = &summary.tree {
        writeln!(writer, "tree ({}): {} edges", tree.strategy, tree.edges.len())?;
        for edge in &tree.edges {
            writeln!(writer, "  {}-{} {}", edge.parent, edge.child, edge.weight)?;
        }
        writeln!(writer, "total weight: {}", tree.total_weight)?;
        writeln!(
            writer,
            "connected: {}",
            if tree.spanning { "yes" } else { "no" }
        )?;
        if !tree.unreached.is_empty() {
            let unreached: Vec<String> = tree.unreached.iter().map(ToString::to_string).collect();
            writeln!(writer, "unreached: {}", unreached.join(" "))?;
        }
    }

    if !summary.layout.is_empty() {
        writeln!(writer, "layout:")?;
        for position in &summary.layout {
            writeln!(
                writer,
                "  {} {:.2} {:.2}",
                position.vertex, position.x, position.y
            )?;
        }
    }
    Ok(())
}
