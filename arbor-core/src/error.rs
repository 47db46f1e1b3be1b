//! Error types for the arbor core library.
//!
//! Defines the graph validation errors raised at construction time, the
//! analysis errors raised by [`crate::Analyzer`], and a convenient result
//! alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::builder::ExecutionStrategy;

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

/// A validation failure raised while constructing a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The vertex list declared the same label more than once.
    #[error("graph {graph_id} declares vertex `{vertex}` more than once")]
    DuplicateVertex {
        /// Identifier of the offending graph.
        graph_id: u64,
        /// The repeated label.
        vertex: Arc<str>,
    },
    /// An edge endpoint is not part of the declared vertex set.
    #[error("graph {graph_id}: edge {edge_index} references unknown vertex `{vertex}`")]
    UnknownVertex {
        /// Identifier of the offending graph.
        graph_id: u64,
        /// Position of the edge in the declared edge list.
        edge_index: usize,
        /// The label that could not be resolved.
        vertex: Arc<str>,
    },
    /// Edge weights must be strictly positive.
    #[error("graph {graph_id}: edge {edge_index} ({from}-{to}) has zero weight")]
    ZeroWeight {
        /// Identifier of the offending graph.
        graph_id: u64,
        /// Position of the edge in the declared edge list.
        edge_index: usize,
        /// First endpoint label.
        from: Arc<str>,
        /// Second endpoint label.
        to: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The vertex list declared the same label more than once.
        DuplicateVertex => DuplicateVertex { .. } => "GRAPH_DUPLICATE_VERTEX",
        /// An edge endpoint is not part of the declared vertex set.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// Edge weights must be strictly positive.
        ZeroWeight => ZeroWeight { .. } => "GRAPH_ZERO_WEIGHT",
    }
}

/// Error type produced when constructing or running [`crate::Analyzer`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ArborError {
    /// Both engines produced a spanning tree but their total weights differ.
    #[error("graph {graph_id}: MST weights differ (prim={prim}, kruskal={kruskal})")]
    WeightMismatch {
        /// Identifier of the graph whose results disagree.
        graph_id: u64,
        /// Total weight reported by Prim's algorithm.
        prim: u64,
        /// Total weight reported by Kruskal's algorithm.
        kruskal: u64,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
}

define_error_codes! {
    /// Stable codes describing [`ArborError`] variants.
    enum ArborErrorCode for ArborError {
        /// Both engines produced a spanning tree but their total weights differ.
        WeightMismatch => WeightMismatch { .. } => "ARBOR_WEIGHT_MISMATCH",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "ARBOR_BACKEND_UNAVAILABLE",
    }
}

/// Convenient alias for results returned by the analysis API.
pub type Result<T> = core::result::Result<T, ArborError>;
