//! Configuration types for the engine

use crate::error::{EngineError, Result};
use encoding_rs::Encoding;
use wordstream_core::{Tokenizer, DEFAULT_SEPARATORS};

/// Default configuration constants
pub mod defaults {
    /// Bytes requested from the source per read
    pub const BUFFER_SIZE: usize = 4096;

    /// Encoding label of the byte stream
    pub const ENCODING: &str = "utf-8";
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Read buffer capacity in bytes
    pub buffer_size: usize,
    /// Characters that end a word
    pub separators: Vec<char>,
    /// Fold words to lowercase before counting
    pub ignore_case: bool,
    /// Encoding label understood by `encoding_rs`
    pub encoding: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            buffer_size: defaults::BUFFER_SIZE,
            separators: DEFAULT_SEPARATORS.to_vec(),
            ignore_case: true,
            encoding: defaults::ENCODING.to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration builder
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(EngineError::ConfigError(
                "buffer_size must be greater than 0".into(),
            ));
        }

        self.resolve_encoding()?;
        self.tokenizer()?;
        Ok(())
    }

    /// Tokenizer for the configured separators
    pub fn tokenizer(&self) -> Result<Tokenizer> {
        Ok(Tokenizer::with_separators(self.separators.iter().copied())?)
    }

    /// Resolve the encoding label
    pub fn resolve_encoding(&self) -> Result<&'static Encoding> {
        Encoding::for_label(self.encoding.trim().as_bytes()).ok_or_else(|| {
            EngineError::UnsupportedEncoding {
                label: self.encoding.clone(),
            }
        })
    }
}

/// Fluent builder for [`EngineConfig`]
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    buffer_size: Option<usize>,
    separators: Option<Vec<char>>,
    ignore_case: Option<bool>,
    encoding: Option<String>,
}

impl EngineConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the read buffer size in bytes
    pub fn buffer_size(mut self, bytes: usize) -> Self {
        self.buffer_size = Some(bytes);
        self
    }

    /// Set the word separator characters
    pub fn separators<I: IntoIterator<Item = char>>(mut self, separators: I) -> Self {
        self.separators = Some(separators.into_iter().collect());
        self
    }

    /// Enable or disable lowercase folding
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = Some(ignore_case);
        self
    }

    /// Set the encoding label of the byte stream
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig> {
        let mut config = EngineConfig::default();

        if let Some(size) = self.buffer_size {
            config.buffer_size = size;
        }

        if let Some(separators) = self.separators {
            config.separators = separators;
        }

        if let Some(ignore_case) = self.ignore_case {
            config.ignore_case = ignore_case;
        }

        if let Some(encoding) = self.encoding {
            config.encoding = encoding;
        }

        config.validate()?;
        Ok(config)
    }
}
