//! Type definitions for MST property-based tests.

use crate::Graph;

/// Shape of the generated graph.
///
/// Each topology stresses a different part of the engine: complete graphs
/// mirror what the generator produces, identical weights stress
/// tie-breaking, sparse graphs leave many keys infinite for longer, and
/// disconnected graphs exercise the early stop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Topology {
    /// Every pair connected, weights from a random range.
    Complete,
    /// Edges drawn from a pool of one to three weights.
    ManyIdentical,
    /// A random spanning path plus a handful of extra edges.
    Sparse,
    /// Several components with no edges between them.
    Disconnected,
}

/// Fixture for MST property tests, carrying the topology for diagnostics.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    pub graph: Graph,
    pub topology: Topology,
}
