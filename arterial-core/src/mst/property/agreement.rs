//! Property 3: selection strategies and repeated runs agree.
//!
//! The binary-heap frontier must select vertices in exactly the order the
//! linear scan does, ties included, so the two trees are compared edge by
//! edge rather than by weight.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{MstEngine, SelectionStrategy};

use super::helpers::describe;
use super::types::MstFixture;

/// Runs the strategy agreement property for the given fixture.
pub(super) fn run_strategy_agreement_property(fixture: &MstFixture) -> TestCaseResult {
    let linear = MstEngine::new()
        .with_strategy(SelectionStrategy::LinearScan)
        .compute(&fixture.graph);
    let heap = MstEngine::new()
        .with_strategy(SelectionStrategy::BinaryHeap)
        .compute(&fixture.graph);

    if linear != heap {
        return Err(TestCaseError::fail(format!(
            "strategies disagree: linear={:?}, heap={:?} ({})",
            linear.edges(),
            heap.edges(),
            describe(fixture),
        )));
    }

    let again = MstEngine::new().compute(&fixture.graph);
    if again != linear {
        return Err(TestCaseError::fail(format!(
            "recomputation changed the tree ({})",
            describe(fixture),
        )));
    }
    Ok(())
}
