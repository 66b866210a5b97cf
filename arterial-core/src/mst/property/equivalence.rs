//! Property 1: equivalence with the sequential Kruskal oracle.
//!
//! Minimum spanning trees are not unique when weights tie, so the property
//! compares total weight and reach rather than edge identity.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::compute_mst;

use super::helpers::describe;
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let tree = compute_mst(&fixture.graph);
    let oracle = sequential_kruskal(&fixture.graph);

    if tree.total_weight() != oracle.root_component_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: prim={}, oracle={} ({})",
            tree.total_weight(),
            oracle.root_component_weight,
            describe(fixture),
        )));
    }

    if tree.reached_count() != oracle.root_component_size {
        return Err(TestCaseError::fail(format!(
            "reach mismatch: prim={}, oracle={} ({})",
            tree.reached_count(),
            oracle.root_component_size,
            describe(fixture),
        )));
    }

    let connected = oracle.component_count == 1;
    if tree.is_spanning() != connected {
        return Err(TestCaseError::fail(format!(
            "spanning flag {} but oracle found {} components ({})",
            tree.is_spanning(),
            oracle.component_count,
            describe(fixture),
        )));
    }

    if connected && tree.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "connected graph weight mismatch: prim={}, oracle={} ({})",
            tree.total_weight(),
            oracle.total_weight,
            describe(fixture),
        )));
    }

    Ok(())
}
