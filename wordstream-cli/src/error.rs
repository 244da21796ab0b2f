//! Error handling for the CLI application

use std::path::PathBuf;
use thiserror::Error;

/// User-facing failures of a wordstream run
#[derive(Debug, Error)]
pub enum CliError {
    /// An input argument matched no readable file
    #[error("no input matches '{pattern}' (pass '-' to read stdin)")]
    NoInputMatched {
        /// The pattern as given on the command line
        pattern: String,
    },

    /// An input argument is not a valid glob
    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as given on the command line
        pattern: String,
        /// Parser message from `glob`
        reason: String,
    },

    /// Stream settings were rejected after merging file and flags
    #[error("invalid [stream] settings: {0}")]
    InvalidStreamSettings(String),

    /// `default_format` names no known report format
    #[error("unknown output format '{name}' (expected text, json or markdown)")]
    UnknownFormat {
        /// Configured format name
        name: String,
    },

    /// An input could not be opened for streaming
    #[error("cannot open input {input}: {reason}")]
    UnreadableInput {
        /// Display name of the input
        input: String,
        /// Underlying failure
        reason: String,
    },

    /// A matched path could not be inspected while expanding a pattern
    #[error("cannot inspect {}: {reason}", path.display())]
    UnreadablePath {
        /// Offending path
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
