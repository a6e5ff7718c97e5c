//! Error types for the spanforest core library.
//!
//! Defines the error enums returned by [`crate::DisjointSet`], [`crate::Graph`]
//! and the algorithms, together with stable machine-readable codes and a
//! convenient result alias.

use std::fmt;

use thiserror::Error;

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

/// An error produced by [`crate::DisjointSet`] operations.
///
/// Labels are carried in their `Debug` rendering so the error stays
/// independent of the label type.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// `make_set` was called with a label that already owns a node.
    #[error("label {label} is already present in the disjoint set")]
    DuplicateKey {
        /// `Debug` rendering of the rejected label.
        label: String,
    },
    /// An operation referenced a label with no node.
    #[error("label {label} is not present in the disjoint set")]
    NotFound {
        /// `Debug` rendering of the missing label.
        label: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// `make_set` was called with a label that already owns a node.
        DuplicateKey => DuplicateKey { .. } => "DISJOINT_SET_DUPLICATE_KEY",
        /// An operation referenced a label with no node.
        NotFound => NotFound { .. } => "DISJOINT_SET_NOT_FOUND",
    }
}

/// Error type produced by [`crate::Graph`] and the graph algorithms.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// `add_vertex` was called with a label that is already a vertex.
    #[error("vertex {label} already exists in the graph")]
    DuplicateKey {
        /// `Debug` rendering of the rejected vertex label.
        label: String,
    },
    /// An operation referenced a vertex that is not in the graph.
    #[error("vertex {label} does not exist in the graph")]
    NotFound {
        /// `Debug` rendering of the missing vertex label.
        label: String,
    },
    /// A union-find operation failed while running an algorithm.
    #[error("disjoint set operation failed: {error}")]
    DisjointSet {
        #[source]
        /// Underlying union-find error bubbled up by the algorithm.
        error: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// `add_vertex` was called with a label that is already a vertex.
        DuplicateKey => DuplicateKey { .. } => "GRAPH_DUPLICATE_KEY",
        /// An operation referenced a vertex that is not in the graph.
        NotFound => NotFound { .. } => "GRAPH_NOT_FOUND",
        /// A union-find operation failed while running an algorithm.
        DisjointSetFailure => DisjointSet { .. } => "GRAPH_DISJOINT_SET_FAILURE",
    }
}

impl GraphError {
    /// Retrieve the inner [`DisjointSetErrorCode`] when the error originated in a
    /// [`crate::DisjointSet`].
    #[must_use]
    pub const fn disjoint_set_code(&self) -> Option<DisjointSetErrorCode> {
        match self {
            Self::DisjointSet { error } => Some(error.code()),
            _ => None,
        }
    }
}

impl From<DisjointSetError> for GraphError {
    fn from(error: DisjointSetError) -> Self {
        Self::DisjointSet { error }
    }
}

/// Convenient alias for results returned by the graph API.
pub type Result<T> = core::result::Result<T, GraphError>;
