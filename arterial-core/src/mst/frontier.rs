//! Minimum-key selection for Prim's algorithm.
//!
//! Both frontiers pick the unvisited vertex with the smallest finite key and
//! break ties towards the lowest vertex index, so they select vertices in the
//! same order.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::Weight;

/// Per-vertex bookkeeping shared by the frontiers.
pub(super) struct PrimState {
    pub(super) visited: Vec<bool>,
    /// `None` stands for an infinite key.
    pub(super) keys: Vec<Option<Weight>>,
    pub(super) parents: Vec<Option<usize>>,
}

impl PrimState {
    pub(super) fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            keys: vec![None; vertex_count],
            parents: vec![None; vertex_count],
        }
    }
}

/// Chooses the next vertex to add to the tree.
pub(super) trait Frontier {
    /// Records that `vertex` now has key `key`.
    fn push(&mut self, vertex: usize, key: Weight);

    /// Returns the unvisited vertex with the smallest finite key, or `None`
    /// when no unvisited vertex is reachable.
    fn pop_min(&mut self, state: &PrimState) -> Option<usize>;
}

/// O(V) scan over every vertex; keys live only in [`PrimState`].
pub(super) struct LinearScan;

impl Frontier for LinearScan {
    fn push(&mut self, _vertex: usize, _key: Weight) {}

    fn pop_min(&mut self, state: &PrimState) -> Option<usize> {
        let mut best: Option<(usize, Weight)> = None;
        for (vertex, (&visited, &key)) in state.visited.iter().zip(&state.keys).enumerate() {
            let Some(key) = key else {
                continue;
            };
            // Strict comparison keeps the lowest index among equal keys.
            if !visited && best.is_none_or(|(_, best_key)| key < best_key) {
                best = Some((vertex, key));
            }
        }
        best.map(|(vertex, _)| vertex)
    }
}

/// Binary heap with lazy deletion of superseded entries.
#[derive(Default)]
pub(super) struct HeapFrontier {
    heap: BinaryHeap<Reverse<(Weight, usize)>>,
}

impl Frontier for HeapFrontier {
    fn push(&mut self, vertex: usize, key: Weight) {
        self.heap.push(Reverse((key, vertex)));
    }

    fn pop_min(&mut self, state: &PrimState) -> Option<usize> {
        while let Some(Reverse((key, vertex))) = self.heap.pop() {
            if !state.visited[vertex] && state.keys[vertex] == Some(key) {
                return Some(vertex);
            }
        }
        None
    }
}
