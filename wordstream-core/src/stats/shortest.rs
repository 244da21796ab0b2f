//! Shortest distinct words

use super::{word_length, BoundedRanking, RankedEntry, RankedWords, WordStats};
use crate::error::Result;
use crate::frequency::FrequencySource;

/// Keeps the `capacity` shortest words seen so far
///
/// Mirror image of [`Longest`](super::Longest): first occurrences only, and a
/// strictly shorter word evicts the maximum entry, which among equally long
/// words is the lexicographically largest.
#[derive(Debug, Clone)]
pub struct Shortest {
    ranking: BoundedRanking,
    source: FrequencySource,
}

impl Shortest {
    /// Identifier used in logs and reports
    pub const NAME: &'static str = "shortest";

    /// Create a tracker for the `capacity` shortest words
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            ranking: BoundedRanking::new(capacity)?,
            source: FrequencySource::default(),
        })
    }
}

impl WordStats for Shortest {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn set_frequency_source(&mut self, source: FrequencySource) {
        self.source = source;
    }

    fn add_word(&mut self, word: &str) {
        if self.source.frequency(word) != 1 {
            return;
        }

        let entry = RankedEntry::new(word_length(word), word);
        if self.ranking.contains(&entry) {
            return;
        }

        let length = entry.metric;
        if self.ranking.is_full() {
            if !self.ranking.max().is_some_and(|longest| length < longest.metric) {
                return;
            }
            self.ranking.pop_max();
        }

        self.ranking.insert(entry);
    }

    fn clear_data(&mut self) {
        self.ranking.clear();
    }

    fn words(&self, descending: bool) -> RankedWords<'_> {
        self.ranking.iter(descending)
    }

    fn capacity(&self) -> usize {
        self.ranking.capacity()
    }

    fn len(&self) -> usize {
        self.ranking.len()
    }
}
