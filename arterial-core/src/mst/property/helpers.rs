//! Shared helper functions for MST property-based tests.

/// Path-halving find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Describes a fixture in failure messages.
pub(super) fn describe(fixture: &super::types::MstFixture) -> String {
    format!(
        "topology={:?}, vertices={}, edges={}",
        fixture.topology,
        fixture.graph.vertex_count(),
        fixture.graph.edge_count(),
    )
}
