//! Error types for sortscope.
//!
//! Sorting itself is total: every sort accepts any sequence, including the
//! empty one, and cannot fail. The only fallible operation in the core is
//! resolving an algorithm from its name.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use thiserror::Error;

/// Error type for sortscope operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The name does not match any of the six algorithms.
    #[error(
        "unknown sorting algorithm `{0}` (expected bubble, insertion, selection, merge, quick or heap)"
    )]
    UnknownAlgorithm(String),
}
