//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
///
/// Every pattern must match at least one file. The result is sorted and
/// free of duplicates.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.msg.to_string(),
            })?;

        let before = files.len();
        for path_result in paths {
            let path = path_result.map_err(|e| CliError::UnreadablePath {
                path: e.path().to_path_buf(),
                reason: e.error().to_string(),
            })?;

            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before {
            return Err(CliError::NoInputMatched {
                pattern: pattern.clone(),
            }
            .into());
        }
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}
