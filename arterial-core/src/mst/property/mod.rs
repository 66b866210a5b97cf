//! Property-based tests for the Prim MST engine.
//!
//! Verifies the engine against a sequential Kruskal oracle, validates
//! structural invariants (acyclicity, unique children, reach), and checks
//! that both selection strategies agree across graph topologies.

mod agreement;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
