//! Stream orchestration for incremental word statistics
//!
//! This crate owns the read loop: it pulls bytes from an asynchronous
//! source, decodes them, tokenizes them with partial-word carryover and
//! feeds a [`WordCollection`]. The lifecycle is a three-state machine
//! (see [`StreamState`]) driven by [`StreamController`].
//!
//! # Example
//!
//! ```rust
//! use wordstream_engine::{share, MostFrequent, StreamController, StreamState};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let controller = StreamController::new();
//! let frequent = share(MostFrequent::new(3).unwrap());
//! controller.add_stat(&frequent);
//!
//! controller.run_stream(&b"to be, or not to be"[..]).await;
//!
//! assert_eq!(controller.stream_state(), StreamState::Stopped);
//! assert_eq!(controller.num_words(), 6);
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod decoder;
pub mod error;

// Re-export key types
pub use config::{EngineConfig, EngineConfigBuilder};
pub use controller::{StreamController, StreamState};
pub use decoder::ChunkDecoder;
pub use error::{EngineError, Result};

// Re-export from core for convenience
pub use wordstream_core::{
    share, CollectionSnapshot, Longest, MostFrequent, RankedEntry, Shortest, StatHandle,
    Tokenizer, WordCollection, WordStats,
};
