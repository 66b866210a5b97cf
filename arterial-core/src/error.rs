//! Error types for the Arterial core library.
//!
//! Defines the error enum exposed by the public API and a convenient result
//! alias.

use std::fmt;

use thiserror::Error;

use crate::graph::Weight;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced while constructing or generating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A graph needs at least one vertex.
    #[error("vertex count must be at least 1 (got {got})")]
    InvalidVertexCount {
        /// The rejected vertex count.
        got: usize,
    },
    /// The dense matrix for this many vertices cannot be allocated.
    #[error("vertex count {got} is too large to store as a dense matrix")]
    TooManyVertices {
        /// The rejected vertex count.
        got: usize,
    },
    /// Zero is reserved for "no edge" and cannot be drawn as a weight.
    #[error("minimum edge weight must be at least 1")]
    ZeroMinimumWeight,
    /// The weight range contained no values.
    #[error("weight range {min}..={max} is empty")]
    EmptyWeightRange {
        /// Lower bound supplied by the caller.
        min: Weight,
        /// Upper bound supplied by the caller.
        max: Weight,
    },
    /// A matrix row did not have one entry per vertex.
    #[error("row {row} has {len} entries but the matrix has {expected} rows")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Number of entries found in the row.
        len: usize,
        /// Number of entries required.
        expected: usize,
    },
    /// The weight matrix disagreed with its transpose.
    #[error("weight ({row}, {col}) = {forward} but ({col}, {row}) = {backward}")]
    Asymmetric {
        /// Row of the first mismatching entry.
        row: usize,
        /// Column of the first mismatching entry.
        col: usize,
        /// Weight stored at `(row, col)`.
        forward: Weight,
        /// Weight stored at `(col, row)`.
        backward: Weight,
    },
    /// A vertex was connected to itself.
    #[error("vertex {vertex} has a self-loop of weight {weight}")]
    SelfLoop {
        /// The vertex carrying the loop.
        vertex: usize,
        /// Weight of the loop.
        weight: Weight,
    },
    /// An edge referenced a vertex outside the graph.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    VertexOutOfBounds {
        /// The out-of-range vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A graph needs at least one vertex.
        InvalidVertexCount => InvalidVertexCount { .. } => "GRAPH_INVALID_VERTEX_COUNT",
        /// The dense matrix for the vertex count cannot be allocated.
        TooManyVertices => TooManyVertices { .. } => "GRAPH_TOO_MANY_VERTICES",
        /// Zero is reserved for "no edge".
        ZeroMinimumWeight => ZeroMinimumWeight => "GRAPH_ZERO_MINIMUM_WEIGHT",
        /// The weight range contained no values.
        EmptyWeightRange => EmptyWeightRange { .. } => "GRAPH_EMPTY_WEIGHT_RANGE",
        /// A matrix row did not have one entry per vertex.
        NotSquare => NotSquare { .. } => "GRAPH_NOT_SQUARE",
        /// The weight matrix disagreed with its transpose.
        Asymmetric => Asymmetric { .. } => "GRAPH_ASYMMETRIC",
        /// A vertex was connected to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge referenced a vertex outside the graph.
        VertexOutOfBounds => VertexOutOfBounds { .. } => "GRAPH_VERTEX_OUT_OF_BOUNDS",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
