//! Byte sources handed to the stream controller

use super::glob_resolver::resolve_patterns;
use anyhow::{Context, Result};
use std::fmt;
use std::path::PathBuf;
use tokio::io::AsyncRead;

/// Marker for standard input on the command line
pub const STDIN_MARKER: &str = "-";

/// Boxed reader accepted by the stream controller
pub type BoxedSource = Box<dyn AsyncRead + Unpin + Send>;

/// One input of a process run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Open the input for asynchronous reading
    pub async fn open(&self) -> Result<BoxedSource> {
        match self {
            InputSource::Stdin => Ok(Box::new(tokio::io::stdin())),
            InputSource::File(path) => {
                let file = tokio::fs::File::open(path)
                    .await
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                Ok(Box::new(file))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve command-line inputs; `-` selects standard input
///
/// Standard input is read first, at most once.
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    let (stdin, patterns): (Vec<_>, Vec<_>) = patterns
        .iter()
        .cloned()
        .partition(|pattern| pattern == STDIN_MARKER);

    let mut inputs = Vec::new();
    if !stdin.is_empty() {
        inputs.push(InputSource::Stdin);
    }
    if !patterns.is_empty() {
        inputs.extend(
            resolve_patterns(&patterns)?
                .into_iter()
                .map(InputSource::File),
        );
    }

    Ok(inputs)
}
