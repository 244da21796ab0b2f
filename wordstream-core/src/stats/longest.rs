//! Longest distinct words

use super::{word_length, BoundedRanking, RankedEntry, RankedWords, WordStats};
use crate::error::Result;
use crate::frequency::FrequencySource;

/// Keeps the `capacity` longest words seen so far
///
/// Only a word's first occurrence is considered; repeats are ignored. When
/// full, a strictly longer word evicts the minimum entry, which among equally
/// short words is the lexicographically smallest.
#[derive(Debug, Clone)]
pub struct Longest {
    ranking: BoundedRanking,
    source: FrequencySource,
}

impl Longest {
    /// Identifier used in logs and reports
    pub const NAME: &'static str = "longest";

    /// Create a tracker for the `capacity` longest words
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            ranking: BoundedRanking::new(capacity)?,
            source: FrequencySource::default(),
        })
    }
}

impl WordStats for Longest {
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
            if !self.ranking.min().is_some_and(|shortest| length > shortest.metric) {
                return;
            }
            self.ranking.pop_min();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::WordCollection;
    use crate::stats::share;

    fn feed(words: &[&str]) -> Longest {
        let source = FrequencySource::new();
        let mut tracker = Longest::new(3).unwrap();
        tracker.set_frequency_source(source.clone());

        for word in words {
            source.record(word);
            tracker.add_word(word);
        }
        tracker
    }

    #[test]
    fn test_progression() {
        let cases: &[(&[&str], usize, &str, &str)] = &[
            (&["a"], 1, "a", "a"),
            (&["a", "b"], 2, "a", "b"),
            (&["a", "b", "c"], 3, "a", "c"),
            (&["a", "b", "c", "d"], 3, "a", "c"),
            (&["1234", "2345", "345", "45"], 3, "345", "2345"),
            (&["123", "123", "1", "1", "2"], 3, "1", "123"),
            (&["123", "123", "1", "1", "2", "1234"], 3, "2", "1234"),
            (&["123", "123", "1", "1", "2", "1234", "12345"], 3, "123", "12345"),
        ];

        for &(words, expected_len, first, last) in cases {
            let tracker = feed(words);
            assert_eq!(tracker.len(), expected_len, "input {:?}", words);

            let ascending: Vec<_> = tracker.words(false).map(|e| e.word.as_str()).collect();
            assert_eq!(ascending.first().copied(), Some(first), "input {:?}", words);
            assert_eq!(ascending.last().copied(), Some(last), "input {:?}", words);

            let descending: Vec<_> = tracker.words(true).map(|e| e.word.as_str()).collect();
            assert_eq!(descending.first().copied(), Some(last));
            assert_eq!(descending.last().copied(), Some(first));
        }
    }

    #[test]
    fn test_repeats_are_ignored() {
        let tracker = feed(&["word", "word", "word"]);
        assert_eq!(tracker.len(), 1);
        assert_eq!(
            tracker.words(false).next(),
            Some(&RankedEntry::new(4, "word"))
        );
    }

    #[test]
    fn test_length_counts_chars() {
        let tracker = feed(&["日本語"]);
        assert_eq!(tracker.words(false).next().map(|e| e.metric), Some(3));
    }

    #[test]
    fn test_reregistered_tracker_keeps_its_entries() {
        let tracker = share(Longest::new(2).unwrap());
        let mut collection = WordCollection::new();
        collection.add_stat(&tracker);
        collection.add_words(["abc", "abcd"]);

        // counts restart while the tracker is detached, so a ranked word
        // comes back with frequency 1
        assert!(collection.remove_stat(&tracker));
        collection.clear_data();
        assert!(collection.add_stat(&tracker));
        collection.add_word("abcd");

        let words: Vec<_> = tracker.lock().words(false).cloned().collect();
        assert_eq!(
            words,
            vec![RankedEntry::new(3, "abc"), RankedEntry::new(4, "abcd")]
        );
    }
}
