//! Benchmark setup error type.

use arterial_core::GraphError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph construction or generation failed.
    #[error("graph setup failed: {0}")]
    Graph(#[from] GraphError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// Description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
