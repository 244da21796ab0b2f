//! Most frequent words

use super::{BoundedRanking, RankedEntry, RankedWords, WordStats};
use crate::error::Result;
use crate::frequency::FrequencySource;
use std::collections::HashMap;

/// Keeps the `capacity` words with the highest global frequency
///
/// Unlike the length trackers, a ranked word's metric keeps growing after it
/// was inserted, so tracked words are refreshed in place. Only the minimum
/// entry can ever be evicted.
#[derive(Debug, Clone)]
pub struct MostFrequent {
    ranking: BoundedRanking,
    members: HashMap<String, u64>,
    source: FrequencySource,
}

impl MostFrequent {
    /// Identifier used in logs and reports
    pub const NAME: &'static str = "most_frequent";

    /// Create a tracker for the `capacity` most frequent words
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            ranking: BoundedRanking::new(capacity)?,
            members: HashMap::with_capacity(capacity),
            source: FrequencySource::default(),
        })
    }

    /// Ranked frequency of `word`, if it is currently tracked
    pub fn tracked_frequency(&self, word: &str) -> Option<u64> {
        self.members.get(word).copied()
    }

    fn insert(&mut self, frequency: u64, word: &str) {
        self.ranking.insert(RankedEntry::new(frequency, word));
        self.members.insert(word.to_owned(), frequency);
    }
}

impl WordStats for MostFrequent {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn set_frequency_source(&mut self, source: FrequencySource) {
        self.source = source;
    }

    fn add_word(&mut self, word: &str) {
        let frequency = self.source.frequency(word);
        if frequency == 0 {
            // not counted by the bound source
            return;
        }

        if let Some(old) = self.members.get_mut(word) {
            let previous = std::mem::replace(old, frequency);
            self.ranking.remove(&RankedEntry::new(previous, word));
            self.ranking.insert(RankedEntry::new(frequency, word));
        } else if !self.ranking.is_full() {
            self.insert(frequency, word);
        } else if self
            .ranking
            .min()
            .is_some_and(|lowest| frequency > lowest.metric)
        {
            if let Some(evicted) = self.ranking.pop_min() {
                log::trace!("{}: '{}' replaces '{}'", Self::NAME, word, evicted.word);
                self.members.remove(&evicted.word);
            }
            self.insert(frequency, word);
        }
    }

    fn clear_data(&mut self) {
        self.ranking.clear();
        self.members.clear();
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
