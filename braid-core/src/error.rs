//! Error types for the braid core library.

use thiserror::Error;

/// Errors returned by disjoint-set operations.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum DisjointSetError {
    /// The universe must contain at least one element.
    #[error("cannot build a disjoint set over zero elements")]
    EmptyUniverse,
    /// An element index fell outside `[0, element_count)`.
    #[error("element {element} is out of bounds for a universe of {element_count} elements")]
    ElementOutOfBounds {
        /// The offending element index.
        element: usize,
        /// Number of elements in the universe.
        element_count: usize,
    },
    /// A node lock was poisoned by a thread that panicked while holding it.
    #[error("lock for {resource} is poisoned")]
    LockPoisoned {
        /// Name of the poisoned resource.
        resource: &'static str,
    },
}

impl DisjointSetError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> DisjointSetErrorCode {
        match self {
            Self::EmptyUniverse => DisjointSetErrorCode::EmptyUniverse,
            Self::ElementOutOfBounds { .. } => DisjointSetErrorCode::ElementOutOfBounds,
            Self::LockPoisoned { .. } => DisjointSetErrorCode::LockPoisoned,
        }
    }
}

/// Machine-readable error codes for [`DisjointSetError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DisjointSetErrorCode {
    /// The universe must contain at least one element.
    EmptyUniverse,
    /// An element index fell outside the universe bounds.
    ElementOutOfBounds,
    /// A node lock was poisoned.
    LockPoisoned,
}

impl DisjointSetErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyUniverse => "EMPTY_UNIVERSE",
            Self::ElementOutOfBounds => "ELEMENT_OUT_OF_BOUNDS",
            Self::LockPoisoned => "LOCK_POISONED",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, DisjointSetError>;
