//! Character and word occurrence counting
//!
//! [`FrequencyTable`] is the single source of truth for counts. The word
//! counts live behind a [`FrequencySource`], a cheaply cloneable shared
//! handle that ranking trackers keep so they can look up a word's current
//! global frequency without owning the table.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared, read-mostly view of the word → count mapping
#[derive(Debug, Clone, Default)]
pub struct FrequencySource {
    words: Arc<RwLock<HashMap<String, u64>>>,
}

impl FrequencySource {
    /// Create an empty source not attached to any table
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count for `word`, zero if it was never recorded
    pub fn frequency(&self, word: &str) -> u64 {
        self.words.read().get(word).copied().unwrap_or(0)
    }

    /// Record one occurrence of `word` and return its new count
    pub fn record(&self, word: &str) -> u64 {
        let mut words = self.words.write();
        match words.get_mut(word) {
            Some(count) => {
                *count += 1;
                *count
            }
            None => {
                words.insert(word.to_owned(), 1);
                1
            }
        }
    }

    /// Number of distinct words recorded
    pub fn len(&self) -> usize {
        self.words.read().len()
    }

    /// Check if no word has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the full mapping
    pub fn to_map(&self) -> HashMap<String, u64> {
        self.words.read().clone()
    }

    /// Check if both handles point at the same mapping
    pub fn ptr_eq(&self, other: &FrequencySource) -> bool {
        Arc::ptr_eq(&self.words, &other.words)
    }

    pub(crate) fn clear(&self) {
        self.words.write().clear();
    }
}

/// Running character and word counts
#[derive(Debug, Default)]
pub struct FrequencyTable {
    num_chars: u64,
    num_words: u64,
    chars: HashMap<char, u64>,
    words: FrequencySource,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every character of `text`
    pub fn add_string(&mut self, text: &str) {
        for ch in text.chars() {
            self.num_chars += 1;
            *self.chars.entry(ch).or_insert(0) += 1;
        }
    }

    /// Count one occurrence of an already-normalized word, returning its new count
    pub fn add_word(&mut self, word: &str) -> u64 {
        self.num_words += 1;
        self.words.record(word)
    }

    /// Reset all counts
    ///
    /// The shared [`FrequencySource`] is emptied in place so handed-out
    /// handles stay attached.
    pub fn clear(&mut self) {
        self.num_chars = 0;
        self.num_words = 0;
        self.chars.clear();
        self.words.clear();
    }

    /// Total characters counted
    pub fn num_chars(&self) -> u64 {
        self.num_chars
    }

    /// Total words counted, repeats included
    pub fn num_words(&self) -> u64 {
        self.num_words
    }

    /// Per-character counts
    pub fn char_frequency(&self) -> &HashMap<char, u64> {
        &self.chars
    }

    /// Snapshot of the per-word counts
    pub fn word_frequency(&self) -> HashMap<String, u64> {
        self.words.to_map()
    }

    /// Current count for a single word
    pub fn word_count(&self, word: &str) -> u64 {
        self.words.frequency(word)
    }

    /// Number of distinct words
    pub fn distinct_words(&self) -> usize {
        self.words.len()
    }

    /// Shared handle onto the word counts
    pub fn source(&self) -> FrequencySource {
        self.words.clone()
    }
}
