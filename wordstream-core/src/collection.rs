//! Word collection: counts plus registered ranking trackers

use crate::frequency::FrequencyTable;
use crate::stats::{RankedEntry, StatHandle};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// Owns the frequency table and fans each word out to registered trackers
///
/// Trackers are notified in registration order. Every tracker is bound to
/// the collection's word counts when it is registered.
#[derive(Debug)]
pub struct WordCollection {
    table: FrequencyTable,
    stats: Vec<StatHandle>,
    ignore_case: bool,
}

impl Default for WordCollection {
    fn default() -> Self {
        Self {
            table: FrequencyTable::new(),
            stats: Vec::new(),
            ignore_case: true,
        }
    }
}

impl WordCollection {
    /// Create an empty collection that folds words to lowercase
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tracker.
    ///
    /// Returns `false` without changes when this very tracker is already
    /// registered.
    pub fn add_stat(&mut self, stat: &StatHandle) -> bool {
        if self.is_registered(stat) {
            return false;
        }

        let mut guard = stat.lock();
        guard.set_frequency_source(self.table.source());
        log::debug!("registered '{}' tracker (capacity {})", guard.name(), guard.capacity());
        drop(guard);

        self.stats.push(Arc::clone(stat));
        true
    }

    /// Unregister a tracker, returning whether it was registered
    pub fn remove_stat(&mut self, stat: &StatHandle) -> bool {
        match self.stats.iter().position(|s| Arc::ptr_eq(s, stat)) {
            Some(index) => {
                let removed = self.stats.remove(index);
                log::debug!("removed '{}' tracker", removed.lock().name());
                true
            }
            None => false,
        }
    }

    /// Check if this tracker instance is registered
    pub fn is_registered(&self, stat: &StatHandle) -> bool {
        self.stats.iter().any(|s| Arc::ptr_eq(s, stat))
    }

    /// Registered trackers in notification order
    pub fn stats(&self) -> &[StatHandle] {
        &self.stats
    }

    /// Count the characters of a raw chunk; trackers are not involved
    pub fn add_string(&mut self, text: &str) {
        self.table.add_string(text);
    }

    /// Count one word and notify every tracker.
    ///
    /// Separators inside `word` are not interpreted.
    pub fn add_word(&mut self, word: &str) {
        let word = if self.ignore_case {
            Cow::Owned(word.to_lowercase())
        } else {
            Cow::Borrowed(word)
        };

        self.table.add_word(&word);

        for stat in &self.stats {
            stat.lock().add_word(&word);
        }
    }

    /// Equivalent to [`add_word`](Self::add_word) for each element in order
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref());
        }
    }

    /// Reset all counts and every tracker's ranking; registrations are kept
    pub fn clear_data(&mut self) {
        self.table.clear();
        for stat in &self.stats {
            stat.lock().clear_data();
        }
    }

    /// Choose whether words are folded to lowercase before counting.
    ///
    /// Already-counted words keep the form they were counted in.
    pub fn set_ignore_case(&mut self, ignore_case: bool) {
        self.ignore_case = ignore_case;
    }

    /// Whether words are folded to lowercase
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Total characters counted
    pub fn num_chars(&self) -> u64 {
        self.table.num_chars()
    }

    /// Total words counted, repeats included
    pub fn num_words(&self) -> u64 {
        self.table.num_words()
    }

    /// Per-character counts
    pub fn char_frequency(&self) -> &HashMap<char, u64> {
        self.table.char_frequency()
    }

    /// Snapshot of the per-word counts
    pub fn word_frequency(&self) -> HashMap<String, u64> {
        self.table.word_frequency()
    }

    /// Underlying frequency table
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// Serializable summary: totals, the `top_chars` most common characters
    /// and every tracker's entries in descending order
    pub fn snapshot(&self, top_chars: usize) -> CollectionSnapshot {
        let mut chars: Vec<CharCount> = self
            .table
            .char_frequency()
            .iter()
            .map(|(&ch, &count)| CharCount { ch, count })
            .collect();
        chars.sort_by(|a, b| b.count.cmp(&a.count).then(a.ch.cmp(&b.ch)));
        chars.truncate(top_chars);

        let rankings = self
            .stats
            .iter()
            .map(|stat| {
                let stat = stat.lock();
                RankingSnapshot {
                    name: stat.name().to_string(),
                    capacity: stat.capacity(),
                    entries: stat.words(true).cloned().collect(),
                }
            })
            .collect();

        CollectionSnapshot {
            num_chars: self.table.num_chars(),
            num_words: self.table.num_words(),
            distinct_words: self.table.distinct_words(),
            top_chars: chars,
            rankings,
        }
    }
}

/// Count for a single character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharCount {
    /// The character
    pub ch: char,
    /// Occurrences
    pub count: u64,
}

/// Entries of one tracker, highest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingSnapshot {
    /// Tracker name
    pub name: String,
    /// Tracker capacity
    pub capacity: usize,
    /// Ranked entries in descending order
    pub entries: Vec<RankedEntry>,
}

/// Point-in-time summary of a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSnapshot {
    /// Total characters counted
    pub num_chars: u64,
    /// Total words counted
    pub num_words: u64,
    /// Distinct words counted
    pub distinct_words: usize,
    /// Most common characters
    pub top_chars: Vec<CharCount>,
    /// One entry per registered tracker, in registration order
    pub rankings: Vec<RankingSnapshot>,
}
