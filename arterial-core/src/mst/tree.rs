//! Output types produced by the Prim engine.

use crate::Weight;

/// A selected tree edge, oriented from the vertex already in the tree
/// (`parent`) to the vertex it attached (`child`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TreeEdge {
    parent: usize,
    child: usize,
    weight: Weight,
}

impl TreeEdge {
    pub(super) const fn new(parent: usize, child: usize, weight: Weight) -> Self {
        Self {
            parent,
            child,
            weight,
        }
    }

    /// Returns the endpoint that was already part of the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent(&self) -> usize { self.parent }

    /// Returns the endpoint attached through this edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn child(&self) -> usize { self.child }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns `true` when the edge joins `a` and `b` in either direction.
    #[must_use]
    pub const fn connects(&self, a: usize, b: usize) -> bool {
        (self.parent == a && self.child == b) || (self.parent == b && self.child == a)
    }
}

/// The tree grown by Prim's algorithm from vertex `0`.
///
/// Edges are ordered by ascending child index. When the input graph is
/// connected the tree spans every vertex and holds `V - 1` edges; otherwise
/// it covers only the vertices reachable from the root and
/// [`SpanningTree::is_spanning`] returns `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    vertex_count: usize,
    edges: Vec<TreeEdge>,
}

impl SpanningTree {
    pub(super) const fn new(vertex_count: usize, edges: Vec<TreeEdge>) -> Self {
        Self {
            vertex_count,
            edges,
        }
    }

    /// Returns the selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[TreeEdge] { &self.edges }

    /// Returns the number of vertices in the source graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when no edge was selected.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Sum of the selected edge weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|edge| u64::from(edge.weight)).sum()
    }

    /// Returns `true` when every vertex was reached from the root.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }

    /// Number of vertices in the tree, the root included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.edges.len() + 1
    }

    /// Vertices the tree could not reach, in ascending order.
    #[must_use]
    pub fn unreached(&self) -> Vec<usize> {
        let mut reached = vec![false; self.vertex_count];
        if let Some(root) = reached.first_mut() {
            *root = true;
        }
        for edge in &self.edges {
            reached[edge.child] = true;
        }
        reached
            .iter()
            .enumerate()
            .filter_map(|(vertex, &hit)| (!hit).then_some(vertex))
            .collect()
    }

    /// Returns the tree parent of `vertex`, if it was attached.
    #[must_use]
    pub fn parent_of(&self, vertex: usize) -> Option<usize> {
        self.edges
            .binary_search_by_key(&vertex, TreeEdge::child)
            .ok()
            .map(|index| self.edges[index].parent)
    }

    /// Returns `true` when the tree contains an edge between `a` and `b`.
    ///
    /// Rendering layers use this to decide which graph edges to highlight.
    #[must_use]
    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.edges.iter().any(|edge| edge.connects(a, b))
    }
}
