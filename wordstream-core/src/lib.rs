//! Incremental word statistics over a tokenized text stream
//!
//! This crate holds the pure domain layer: no I/O and no async. Text arrives
//! chunk by chunk, is split into words by the [`Tokenizer`], counted by a
//! [`FrequencyTable`] and fanned out to bounded top-K trackers. Nothing is
//! ever recomputed from accumulated history.
//!
//! # Example
//!
//! ```rust
//! use wordstream_core::{share, Longest, MostFrequent, Tokenizer, WordCollection};
//!
//! let mut collection = WordCollection::new();
//! let frequent = share(MostFrequent::new(2).unwrap());
//! let longest = share(Longest::new(2).unwrap());
//! collection.add_stat(&frequent);
//! collection.add_stat(&longest);
//!
//! let tokenizer = Tokenizer::new();
//! let chunk = "the quick fox, the lazy dog. the e";
//! collection.add_string(chunk);
//! let tokens = tokenizer.process_words(chunk, None);
//! collection.add_words(&tokens.words);
//! assert_eq!(tokens.leftover.as_deref(), Some("e"));
//!
//! let top = frequent.lock().words(true).next().cloned().unwrap();
//! assert_eq!((top.metric, top.word.as_str()), (3, "the"));
//! ```

#![warn(missing_docs)]

pub mod collection;
pub mod error;
pub mod frequency;
pub mod stats;
pub mod tokenizer;

// Re-export key types
pub use collection::{CharCount, CollectionSnapshot, RankingSnapshot, WordCollection};
pub use error::{CoreError, Result};
pub use frequency::{FrequencySource, FrequencyTable};
pub use stats::{
    share, BoundedRanking, Longest, MostFrequent, RankedEntry, RankedWords, Shortest,
    StatHandle, WordStats,
};
pub use tokenizer::{Tokenizer, Tokens, DEFAULT_SEPARATORS};
