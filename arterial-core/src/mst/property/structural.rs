//! Property 2: structural invariant verification.
//!
//! For any tree produced by the engine, verifies:
//!
//! - **Real edges**: every tree edge exists in the graph with that weight.
//! - **Unique children**: no vertex is attached twice and the root never is.
//! - **Ordering**: edges are sorted by strictly increasing child.
//! - **Acyclicity**: union-find never sees a cycle.
//! - **Reach**: `unreached()` and the attached vertices partition the graph.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{SpanningTree, compute_mst, mst::ROOT};

use super::helpers::{describe, find_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let tree = compute_mst(&fixture.graph);

    validate_real_edges(fixture, &tree)?;
    validate_children(fixture, &tree)?;
    validate_acyclicity(fixture, &tree)?;
    validate_reach(fixture, &tree)?;
    Ok(())
}

fn validate_real_edges(fixture: &MstFixture, tree: &SpanningTree) -> TestCaseResult {
    for (i, edge) in tree.edges().iter().enumerate() {
        let stored = fixture.graph.weight(edge.parent(), edge.child());
        if edge.weight() == 0 || stored != Some(edge.weight()) {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) weight {} but graph stores {stored:?} ({})",
                edge.parent(),
                edge.child(),
                edge.weight(),
                describe(fixture),
            )));
        }
    }
    Ok(())
}

fn validate_children(fixture: &MstFixture, tree: &SpanningTree) -> TestCaseResult {
    let mut previous: Option<usize> = None;
    for (i, edge) in tree.edges().iter().enumerate() {
        if edge.child() == ROOT || edge.parent() == edge.child() {
            return Err(TestCaseError::fail(format!(
                "edge {i}: invalid child {} with parent {} ({})",
                edge.child(),
                edge.parent(),
                describe(fixture),
            )));
        }
        if previous.is_some_and(|child| child >= edge.child()) {
            return Err(TestCaseError::fail(format!(
                "edge {i}: child {} is not strictly after {previous:?} ({})",
                edge.child(),
                describe(fixture),
            )));
        }
        previous = Some(edge.child());
    }
    Ok(())
}

fn validate_acyclicity(fixture: &MstFixture, tree: &SpanningTree) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..fixture.graph.vertex_count()).collect();
    for (i, edge) in tree.edges().iter().enumerate() {
        let a = find_root(&mut parent, edge.parent());
        let b = find_root(&mut parent, edge.child());
        if a == b {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) creates a cycle ({})",
                edge.parent(),
                edge.child(),
                describe(fixture),
            )));
        }
        parent[b] = a;
    }
    Ok(())
}

fn validate_reach(fixture: &MstFixture, tree: &SpanningTree) -> TestCaseResult {
    let unreached = tree.unreached();
    let attached = tree.edges().len();
    if unreached.len() + attached + 1 != fixture.graph.vertex_count() {
        return Err(TestCaseError::fail(format!(
            "{} unreached + {attached} attached + root != {} vertices ({})",
            unreached.len(),
            fixture.graph.vertex_count(),
            describe(fixture),
        )));
    }
    if let Some(vertex) = unreached.iter().find(|&&v| tree.parent_of(v).is_some()) {
        return Err(TestCaseError::fail(format!(
            "vertex {vertex} is both attached and unreached ({})",
            describe(fixture),
        )));
    }
    Ok(())
}
