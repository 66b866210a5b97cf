//! Sequential Kruskal oracle for MST property verification.
//!
//! A deliberately simple, independent reference: sort every edge by weight
//! and accept it when it joins two different union-find sets. Prim only
//! grows the component containing the root, so the oracle reports the
//! forest weight of that component alongside the global figures.

use crate::Graph;

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: u64,
    /// Total weight of the forest restricted to the root's component.
    pub root_component_weight: u64,
    /// Number of vertices in the root's component.
    pub root_component_size: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with sequential Kruskal.
pub(super) fn sequential_kruskal(graph: &Graph) -> OracleResult {
    let vertex_count = graph.vertex_count();
    let mut edges: Vec<_> = graph.edges().collect();
    edges.sort_unstable_by_key(|&(left, right, weight)| (weight, left, right));

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut accepted = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut component_count = vertex_count;

    for (left, right, weight) in edges {
        let left_root = find_root(&mut parent, left);
        let right_root = find_root(&mut parent, right);
        if left_root != right_root {
            parent[right_root] = left_root;
            accepted.push((left, weight));
            component_count -= 1;
        }
    }

    let root = find_root(&mut parent, 0);
    let root_component_weight = accepted
        .iter()
        .filter(|(vertex, _)| find_root(&mut parent, *vertex) == root)
        .map(|(_, weight)| u64::from(*weight))
        .sum();
    let root_component_size = (0..vertex_count)
        .filter(|&vertex| find_root(&mut parent, vertex) == root)
        .count();

    OracleResult {
        total_weight: accepted.iter().map(|(_, weight)| u64::from(*weight)).sum(),
        root_component_weight,
        root_component_size,
        component_count,
    }
}
