//! Benchmark support crate for arterial.
//!
//! Provides seeded graph fixtures and parameter labels used by the Criterion
//! benchmarks for graph generation and Prim's algorithm.

pub mod error;
pub mod fixtures;
pub mod params;
