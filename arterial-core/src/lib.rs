//! Arterial core library.
//!
//! Generates random street-intersection graphs and connects every
//! intersection at minimum total cost with Prim's algorithm.
//!
//! ```
//! use arterial_core::{GraphGenerator, compute_mst};
//!
//! let graph = GraphGenerator::from_seed(1).generate(6)?;
//! let tree = compute_mst(&graph);
//! assert_eq!(tree.len(), 5);
//! assert!(tree.is_spanning());
//! # Ok::<(), arterial_core::GraphError>(())
//! ```

mod error;
mod generator;
mod graph;
mod mst;
#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    generator::{GraphGenerator, WeightRange},
    graph::{Graph, Weight},
    mst::{MstEngine, ROOT, SelectionStrategy, SpanningTree, TreeEdge, compute_mst},
};
