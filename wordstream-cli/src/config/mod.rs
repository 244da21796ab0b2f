//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wordstream_engine::{
    share, EngineConfig, Longest, MostFrequent, Shortest, StatHandle,
};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Stream configuration
    #[serde(default)]
    pub stream: StreamConfig,

    /// Tracker configuration
    #[serde(default)]
    pub stats: StatsConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Serialize the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Stream-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct StreamConfig {
    /// Bytes requested per read
    pub buffer_size: usize,

    /// Characters that end a word
    pub separators: Vec<char>,

    /// Fold words to lowercase before counting
    pub ignore_case: bool,

    /// Encoding label of the input files
    pub encoding: String,
}

impl Default for StreamConfig {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            buffer_size: engine.buffer_size,
            separators: engine.separators,
            ignore_case: engine.ignore_case,
            encoding: engine.encoding,
        }
    }
}

impl StreamConfig {
    /// Convert into a validated engine configuration
    pub fn to_engine_config(&self) -> Result<EngineConfig> {
        EngineConfig::builder()
            .buffer_size(self.buffer_size)
            .separators(self.separators.iter().copied())
            .ignore_case(self.ignore_case)
            .encoding(self.encoding.clone())
            .build()
            .context("Invalid stream configuration")
    }
}

/// Capacities of the ranking trackers; 0 disables a tracker
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct StatsConfig {
    /// Number of most frequent words to keep
    pub most_frequent: usize,

    /// Number of longest words to keep
    pub longest: usize,

    /// Number of shortest words to keep
    pub shortest: usize,

    /// Number of most common characters to report
    pub top_chars: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            most_frequent: 10,
            longest: 5,
            shortest: 5,
            top_chars: 10,
        }
    }
}

impl StatsConfig {
    /// Set every tracker capacity at once
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.most_frequent = capacity;
        self.longest = capacity;
        self.shortest = capacity;
        self
    }

    /// Create the enabled trackers in report order
    pub fn build_trackers(&self) -> Result<Vec<StatHandle>> {
        let mut trackers = Vec::new();

        if self.most_frequent > 0 {
            trackers.push(share(MostFrequent::new(self.most_frequent)?));
        }
        if self.longest > 0 {
            trackers.push(share(Longest::new(self.longest)?));
        }
        if self.shortest > 0 {
            trackers.push(share(Shortest::new(self.shortest)?));
        }

        Ok(trackers)
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = CliConfig::default();
        let text = config.to_toml().unwrap();
        let parsed: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[stats]\nmost_frequent = 3\nlongest = 0").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.stats.most_frequent, 3);
        assert_eq!(config.stats.longest, 0);
        assert_eq!(config.stats.shortest, 5);
        assert_eq!(config.stream, StreamConfig::default());

        let trackers = config.stats.build_trackers().unwrap();
        let names: Vec<_> = trackers.iter().map(|t| t.lock().name()).collect();
        assert_eq!(names, vec!["most_frequent", "shortest"]);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[stream\nbuffer_size = ").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_stream_config_validation() {
        let config = StreamConfig {
            buffer_size: 0,
            ..StreamConfig::default()
        };
        assert!(config.to_engine_config().is_err());

        let config = StreamConfig {
            separators: vec![';'],
            ignore_case: false,
            ..StreamConfig::default()
        };
        let engine = config.to_engine_config().unwrap();
        assert_eq!(engine.separators, vec![';']);
        assert!(!engine.ignore_case);
    }

    #[test]
    fn test_with_capacity() {
        let stats = StatsConfig::default().with_capacity(2);
        assert_eq!((stats.most_frequent, stats.longest, stats.shortest), (2, 2, 2));
        assert_eq!(stats.top_chars, 10);
    }
}
