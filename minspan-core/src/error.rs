//! Error types for the minspan core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

/// Errors returned while registering vertices or computing a spanning
/// forest.
///
/// Vertex identifiers are captured as `Arc<str>` via their `Display`
/// rendering at construction time, so the error type stays independent
/// of the caller's vertex type.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// The vertex set contained the same identifier twice.
    DuplicateVertex {
        /// The repeated identifier.
        vertex: Arc<str>,
    },
    /// An operation referenced a vertex that was never registered.
    UnknownVertex {
        /// The unregistered identifier.
        vertex: Arc<str>,
    },
    /// An edge carried a weight that is not a finite number.
    InvalidWeight {
        /// The edge's source identifier.
        source: Arc<str>,
        /// The edge's target identifier.
        target: Arc<str>,
        /// The offending weight value.
        weight: f64,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateVertex { vertex } => {
                write!(f, "vertex `{vertex}` is registered twice")
            }
            Self::UnknownVertex { vertex } => {
                write!(f, "vertex `{vertex}` is not registered")
            }
            Self::InvalidWeight {
                source,
                target,
                weight,
            } => write!(
                f,
                "edge ({source}, {target}) has non-finite weight {weight}"
            ),
        }
    }
}

impl std::error::Error for GraphError {}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::DuplicateVertex { .. } => GraphErrorCode::DuplicateVertex,
            Self::UnknownVertex { .. } => GraphErrorCode::UnknownVertex,
            Self::InvalidWeight { .. } => GraphErrorCode::InvalidWeight,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// The vertex set contained the same identifier twice.
    DuplicateVertex,
    /// An operation referenced a vertex that was never registered.
    UnknownVertex,
    /// An edge carried a weight that is not a finite number.
    InvalidWeight,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateVertex => "DUPLICATE_VERTEX",
            Self::UnknownVertex => "UNKNOWN_VERTEX",
            Self::InvalidWeight => "INVALID_WEIGHT",
        }
    }
}

impl fmt::Display for GraphErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Captures a vertex identifier's `Display` rendering for an error payload.
pub(crate) fn display_name(value: &impl fmt::Display) -> Arc<str> {
    Arc::from(value.to_string())
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
