//! Bounded top-K word rankings
//!
//! Every ranking policy implements [`WordStats`]. A tracker keeps at most
//! `capacity` [`RankedEntry`] values in a [`BoundedRanking`] and is updated
//! one word occurrence at a time, after the shared [`FrequencySource`] has
//! already counted that occurrence. History is never rescanned.
//!
//! | Tracker | Metric | Considers | Evicts |
//! |---|---|---|---|
//! | [`MostFrequent`] | global frequency | every occurrence | minimum entry |
//! | [`Longest`] | length in chars | first occurrence only | minimum entry |
//! | [`Shortest`] | length in chars | first occurrence only | maximum entry |

use crate::error::{CoreError, Result};
use crate::frequency::FrequencySource;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::{btree_set, BTreeSet};
use std::fmt;
use std::sync::Arc;

pub mod longest;
pub mod most_frequent;
pub mod shortest;

pub use longest::Longest;
pub use most_frequent::MostFrequent;
pub use shortest::Shortest;

/// A tracker shared between its owner and a word collection
///
/// Registration identity is the allocation, compared with [`Arc::ptr_eq`].
pub type StatHandle = Arc<Mutex<dyn WordStats>>;

/// Wrap a tracker into a [`StatHandle`]
pub fn share<S: WordStats + 'static>(stats: S) -> StatHandle {
    Arc::new(Mutex::new(stats))
}

/// One ranked word
///
/// Entries order by `metric` first and `word` second, so equal metrics
/// break ties deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Ranking metric (frequency or length)
    pub metric: u64,
    /// The ranked word
    pub word: String,
}

impl RankedEntry {
    /// Create a new entry
    pub fn new(metric: u64, word: impl Into<String>) -> Self {
        Self {
            metric,
            word: word.into(),
        }
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.metric)
    }
}

/// Capability shared by all ranking trackers
pub trait WordStats: Send + fmt::Debug {
    /// Short identifier used in logs and reports
    fn name(&self) -> &'static str;

    /// Bind the tracker to the word counts it reads frequencies from
    fn set_frequency_source(&mut self, source: FrequencySource);

    /// Observe one occurrence of `word`.
    ///
    /// Called after the frequency source has counted this occurrence.
    fn add_word(&mut self, word: &str);

    /// Drop every ranked entry
    fn clear_data(&mut self);

    /// Ranked entries, ascending or descending by `(metric, word)`.
    ///
    /// The iterator borrows the tracker and can be requested again at any
    /// time; it never mutates state.
    fn words(&self, descending: bool) -> RankedWords<'_>;

    /// Maximum number of ranked entries
    fn capacity(&self) -> usize;

    /// Current number of ranked entries
    fn len(&self) -> usize;

    /// Check if nothing is ranked yet
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered set of at most `capacity` entries
#[derive(Debug, Clone)]
pub struct BoundedRanking {
    capacity: usize,
    entries: BTreeSet<RankedEntry>,
}

impl BoundedRanking {
    /// Create an empty ranking; `capacity` must be at least 1
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CoreError::InvalidCapacity { capacity });
        }

        Ok(Self {
            capacity,
            entries: BTreeSet::new(),
        })
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the ranking holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if an insert would need an eviction first
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Lowest-ranked entry
    pub fn min(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    /// Highest-ranked entry
    pub fn max(&self) -> Option<&RankedEntry> {
        self.entries.last()
    }

    /// Check if `entry` is ranked
    pub fn contains(&self, entry: &RankedEntry) -> bool {
        self.entries.contains(entry)
    }

    /// Insert an entry.
    ///
    /// Returns `false` if the entry is already ranked or the ranking is full;
    /// the caller makes room first.
    pub fn insert(&mut self, entry: RankedEntry) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries.insert(entry)
    }

    /// Remove a specific entry
    pub fn remove(&mut self, entry: &RankedEntry) -> bool {
        self.entries.remove(entry)
    }

    /// Remove and return the lowest-ranked entry
    pub fn pop_min(&mut self) -> Option<RankedEntry> {
        self.entries.pop_first()
    }

    /// Remove and return the highest-ranked entry
    pub fn pop_max(&mut self) -> Option<RankedEntry> {
        self.entries.pop_last()
    }

    /// Remove every entry, keeping the capacity
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate entries in the requested direction
    pub fn iter(&self, descending: bool) -> RankedWords<'_> {
        RankedWords {
            inner: self.entries.iter(),
            descending,
        }
    }
}

/// Borrowing iterator over ranked entries
#[derive(Debug, Clone)]
pub struct RankedWords<'a> {
    inner: btree_set::Iter<'a, RankedEntry>,
    descending: bool,
}

impl<'a> Iterator for RankedWords<'a> {
    type Item = &'a RankedEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.descending {
            self.inner.next_back()
        } else {
            self.inner.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for RankedWords<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.descending {
            self.inner.next()
        } else {
            self.inner.next_back()
        }
    }
}

impl ExactSizeIterator for RankedWords<'_> {}

/// Length metric shared by the length-based trackers
pub(crate) fn word_length(word: &str) -> u64 {
    word.chars().count() as u64
}
