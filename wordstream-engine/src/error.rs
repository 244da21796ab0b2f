//! Layered error types
//!
//! Core construction errors are wrapped so callers deal with a single type.

use wordstream_core::CoreError;
use thiserror::Error;

/// Engine-level errors (Application Layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core domain error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Unknown text encoding label
    #[error("unsupported encoding '{label}'")]
    UnsupportedEncoding {
        /// The label that could not be resolved
        label: String,
    },

    /// I/O error while opening a byte source
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_is_wrapped() {
        let error: EngineError = CoreError::InvalidCapacity { capacity: 0 }.into();
        assert!(matches!(error, EngineError::Core(_)));
        assert!(error.to_string().starts_with("core error:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let error: EngineError = io.into();
        assert_eq!(error.to_string(), "I/O error: missing.txt");
    }

    #[test]
    fn test_unsupported_encoding_display() {
        let error = EngineError::UnsupportedEncoding {
            label: "klingon".to_string(),
        };
        assert_eq!(error.to_string(), "unsupported encoding 'klingon'");
    }
}
