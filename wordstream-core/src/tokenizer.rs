//! Separator-based word splitting with partial-word carryover
//!
//! A stream is read in arbitrary chunks, so the last token of a chunk may be
//! cut in half. [`Tokenizer::process_words`] keeps such a token out of the
//! word list and hands it back as a leftover to be prefixed onto the next
//! chunk.

use crate::error::{CoreError, Result};

/// Characters that end a word unless configured otherwise
pub const DEFAULT_SEPARATORS: [char; 6] = [' ', '\t', '\n', '\r', '.', ','];

/// Result of tokenizing one chunk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    /// Complete words, in stream order
    pub words: Vec<String>,
    /// Unterminated trailing fragment, if the chunk did not end on a separator
    pub leftover: Option<String>,
}

/// Splits text on a fixed set of separator characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    separators: Vec<char>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_vec(),
        }
    }
}

impl Tokenizer {
    /// Create a tokenizer using [`DEFAULT_SEPARATORS`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with a custom separator set
    pub fn with_separators<I>(separators: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut separators: Vec<char> = separators.into_iter().collect();
        separators.sort_unstable();
        separators.dedup();

        if separators.is_empty() {
            return Err(CoreError::InvalidSeparators);
        }

        Ok(Self { separators })
    }

    /// The configured separator characters
    pub fn separators(&self) -> &[char] {
        &self.separators
    }

    /// Check if a character ends a word
    #[inline]
    pub fn is_separator(&self, ch: char) -> bool {
        self.separators.contains(&ch)
    }

    /// Split `chunk` into words, prefixing it with the previous leftover.
    ///
    /// Empty tokens between adjacent separators are discarded. When the
    /// combined text does not end on a separator its final token is returned
    /// as `leftover` instead of as a word.
    pub fn process_words(&self, chunk: &str, partial_word: Option<&str>) -> Tokens {
        let prefix = partial_word.unwrap_or_default();

        let mut combined = String::with_capacity(prefix.len() + chunk.len());
        combined.push_str(prefix);
        combined.push_str(chunk);

        let terminated = combined
            .chars()
            .next_back()
            .map_or(true, |ch| self.is_separator(ch));

        let mut words: Vec<String> = combined
            .split(|ch: char| self.is_separator(ch))
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect();

        let leftover = if terminated { None } else { words.pop() };

        Tokens { words, leftover }
    }
}
