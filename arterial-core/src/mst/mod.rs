//! Minimum spanning tree construction with Prim's algorithm.
//!
//! The engine grows a single tree from vertex `0`, repeatedly attaching the
//! cheapest edge that crosses from the tree to an outside vertex. A weight of
//! `0` is treated as a missing edge and never relaxes a key. When the graph
//! is disconnected the engine stops as soon as no outside vertex is reachable
//! and returns the partial tree; callers detect this through
//! [`SpanningTree::is_spanning`].
//!
//! Vertex selection is pluggable through [`SelectionStrategy`]. Both
//! strategies break ties towards the lowest vertex index and therefore return
//! identical trees.

mod frontier;
mod tree;

use tracing::{Span, debug, field, instrument};

use crate::Graph;

use self::frontier::{Frontier, HeapFrontier, LinearScan, PrimState};

pub use self::tree::{SpanningTree, TreeEdge};

/// The vertex every tree is grown from.
pub const ROOT: usize = 0;

/// How the engine finds the next vertex to attach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionStrategy {
    /// Scan every vertex on each step. `O(V²)` overall and the fastest
    /// choice for dense graphs of interactive size.
    #[default]
    LinearScan,
    /// Keep candidate keys in a binary heap. `O(E log V)` overall.
    BinaryHeap,
}

impl SelectionStrategy {
    /// Returns the symbolic name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LinearScan => "linear_scan",
            Self::BinaryHeap => "binary_heap",
        }
    }
}

/// Computes minimum spanning trees.
///
/// # Examples
/// ```
/// use arterial_core::{Graph, MstEngine, SelectionStrategy};
///
/// let graph = Graph::from_edges(
///     4,
///     [(0, 1, 2), (0, 2, 3), (0, 3, 1), (1, 2, 4), (1, 3, 5), (2, 3, 6)],
/// )?;
/// let tree = MstEngine::new()
///     .with_strategy(SelectionStrategy::BinaryHeap)
///     .compute(&graph);
/// assert_eq!(tree.total_weight(), 6);
/// assert!(tree.is_spanning());
/// # Ok::<(), arterial_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MstEngine {
    strategy: SelectionStrategy,
}

impl MstEngine {
    /// Creates an engine using [`SelectionStrategy::LinearScan`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vertex selection strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured selection strategy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn strategy(&self) -> SelectionStrategy { self.strategy }

    /// Runs Prim's algorithm over `graph`.
    ///
    /// The result is a fresh value; calling this twice on the same graph
    /// yields equal trees.
    #[must_use]
    #[instrument(
        name = "mst.prim",
        skip(self, graph),
        fields(
            vertex_count = graph.vertex_count(),
            strategy = self.strategy.as_str(),
            edge_count = field::Empty,
            spanning = field::Empty,
        ),
    )]
    pub fn compute(&self, graph: &Graph) -> SpanningTree {
        let tree = match self.strategy {
            SelectionStrategy::LinearScan => grow(graph, LinearScan),
            SelectionStrategy::BinaryHeap => grow(graph, HeapFrontier::default()),
        };

        let span = Span::current();
        span.record("edge_count", tree.len());
        span.record("spanning", tree.is_spanning());
        if !tree.is_spanning() {
            debug!(
                reached = tree.reached_count(),
                vertex_count = graph.vertex_count(),
                "graph is disconnected; returning partial tree"
            );
        }
        tree
    }
}

/// Computes the minimum spanning tree of `graph` with the default engine.
///
/// # Examples
/// ```
/// use arterial_core::{Graph, compute_mst};
///
/// let graph = Graph::from_edges(3, [(0, 1, 4), (1, 2, 1), (0, 2, 2)])?;
/// let tree = compute_mst(&graph);
/// assert!(tree.contains(1, 2));
/// assert!(tree.contains(2, 0));
/// assert!(!tree.contains(0, 1));
/// # Ok::<(), arterial_core::GraphError>(())
/// ```
#[must_use]
pub fn compute_mst(graph: &Graph) -> SpanningTree {
    MstEngine::new().compute(graph)
}

fn grow<F: Frontier>(graph: &Graph, mut frontier: F) -> SpanningTree {
    let vertex_count = graph.vertex_count();
    let mut state = PrimState::new(vertex_count);
    state.keys[ROOT] = Some(0);
    frontier.push(ROOT, 0);

    // The final vertex never needs relaxing, so `V - 1` selections suffice.
    for _ in 1..vertex_count {
        let Some(current) = frontier.pop_min(&state) else {
            break;
        };
        state.visited[current] = true;

        for (next, &weight) in graph.row(current).iter().enumerate() {
            if weight == 0 || state.visited[next] {
                continue;
            }
            if state.keys[next].is_none_or(|key| weight < key) {
                state.keys[next] = Some(weight);
                state.parents[next] = Some(current);
                frontier.push(next, weight);
            }
        }
    }

    let edges = state
        .parents
        .iter()
        .zip(&state.keys)
        .enumerate()
        .filter_map(|(child, (parent, key))| {
            let parent = (*parent)?;
            let weight = (*key)?;
            Some(TreeEdge::new(parent, child, weight))
        })
        .collect();
    SpanningTree::new(vertex_count, edges)
}

#[cfg(test)]
mod property;
