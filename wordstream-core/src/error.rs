//! Error types for the word statistics domain

use thiserror::Error;

/// Errors raised while constructing domain components
///
/// The streaming operations themselves never fail; only invalid
/// construction parameters are reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A ranking tracker was created with room for zero words
    #[error("tracker capacity must be at least 1, got {capacity}")]
    InvalidCapacity {
        /// The rejected capacity
        capacity: usize,
    },

    /// A tokenizer was created without any separator characters
    #[error("separator set must contain at least one character")]
    InvalidSeparators,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
