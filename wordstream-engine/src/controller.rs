//! Stream lifecycle and the cooperative read loop
//!
//! ```text
//!   Off ──start──▶ Running ──stop / end of stream──▶ Stopped
//!                     ▲                                  │
//!                     └──────────────start───────────────┘
//! ```
//!
//! Off is only the state of a freshly created controller. A stop request is
//! a state change observed between chunks; a chunk that has been read is
//! always processed completely.

use crate::config::EngineConfig;
use crate::decoder::ChunkDecoder;
use crate::error::Result;
use encoding_rs::Encoding;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use wordstream_core::{CollectionSnapshot, StatHandle, Tokenizer, WordCollection};

/// Lifecycle state of a [`StreamController`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StreamState {
    /// Never started
    #[default]
    Off,
    /// Not reading; accumulated data is kept
    Stopped,
    /// A read loop is active
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Lifecycle {
    state: StreamState,
    // generation of the most recently started run
    run: u64,
}

impl Lifecycle {
    fn is_running(&self, run: u64) -> bool {
        self.state == StreamState::Running && self.run == run
    }
}

/// Drives a byte source into a [`WordCollection`]
///
/// Cloning yields another handle onto the same controller, which is how a
/// spawned read loop and its owner share state.
#[derive(Debug, Clone)]
pub struct StreamController {
    config: Arc<EngineConfig>,
    tokenizer: Arc<Tokenizer>,
    encoding: &'static Encoding,
    collection: Arc<Mutex<WordCollection>>,
    lifecycle: Arc<watch::Sender<Lifecycle>>,
}

impl Default for StreamController {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamController {
    /// Create a controller with the default configuration and an empty collection
    pub fn new() -> Self {
        Self::from_parts(
            EngineConfig::default(),
            Tokenizer::new(),
            encoding_rs::UTF_8,
            WordCollection::new(),
        )
    }

    /// Create a controller with a validated configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        Self::with_collection(config, WordCollection::new())
    }

    /// Create a controller around an existing collection.
    ///
    /// The collection's case folding is set from the configuration.
    pub fn with_collection(config: EngineConfig, mut collection: WordCollection) -> Result<Self> {
        config.validate()?;
        let tokenizer = config.tokenizer()?;
        let encoding = config.resolve_encoding()?;
        collection.set_ignore_case(config.ignore_case);

        Ok(Self::from_parts(config, tokenizer, encoding, collection))
    }

    fn from_parts(
        config: EngineConfig,
        tokenizer: Tokenizer,
        encoding: &'static Encoding,
        collection: WordCollection,
    ) -> Self {
        let (lifecycle, _) = watch::channel(Lifecycle {
            state: StreamState::Off,
            run: 0,
        });

        Self {
            config: Arc::new(config),
            tokenizer: Arc::new(tokenizer),
            encoding,
            collection: Arc::new(Mutex::new(collection)),
            lifecycle: Arc::new(lifecycle),
        }
    }

    /// Start reading `source` on a spawned tokio task.
    ///
    /// The state is Running when this returns. Returns `None` without
    /// touching `source` if a stream is already running; new data is
    /// added to whatever was accumulated before.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn start_stream<R>(&self, source: R) -> Option<JoinHandle<()>>
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let run = self.claim_run()?;
        let controller = self.clone();
        Some(tokio::spawn(async move {
            controller.read_loop(source, run).await;
        }))
    }

    /// Run the read loop on the current task until the stream stops.
    ///
    /// No-op if a stream is already running.
    pub async fn run_stream<R>(&self, source: R)
    where
        R: AsyncRead + Unpin,
    {
        if let Some(run) = self.claim_run() {
            self.read_loop(source, run).await;
        }
    }

    /// Request the running stream to stop.
    ///
    /// Returns `false` if no stream was running. Accumulated data is kept.
    pub fn stop_stream(&self) -> bool {
        let stopped = self.lifecycle.send_if_modified(|lifecycle| {
            if lifecycle.state != StreamState::Running {
                return false;
            }
            lifecycle.state = StreamState::Stopped;
            true
        });

        if stopped {
            log::debug!("stream stop requested");
        }
        stopped
    }

    /// Stop the stream, then clear all collected data
    pub fn reset_stream(&self) {
        self.stop_stream();
        self.collection.lock().clear_data();
        log::debug!("stream data cleared");
    }

    /// Current lifecycle state
    pub fn stream_state(&self) -> StreamState {
        self.lifecycle.borrow().state
    }

    /// Shared handle onto the collected statistics
    pub fn collection(&self) -> &Arc<Mutex<WordCollection>> {
        &self.collection
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Register a tracker with the owned collection
    pub fn add_stat(&self, stat: &StatHandle) -> bool {
        self.collection.lock().add_stat(stat)
    }

    /// Unregister a tracker from the owned collection
    pub fn remove_stat(&self, stat: &StatHandle) -> bool {
        self.collection.lock().remove_stat(stat)
    }

    /// Total words collected
    pub fn num_words(&self) -> u64 {
        self.collection.lock().num_words()
    }

    /// Total characters collected
    pub fn num_chars(&self) -> u64 {
        self.collection.lock().num_chars()
    }

    /// Summary of the collected statistics
    pub fn snapshot(&self, top_chars: usize) -> CollectionSnapshot {
        self.collection.lock().snapshot(top_chars)
    }

    /// Transition to Running and return the new run generation
    fn claim_run(&self) -> Option<u64> {
        let mut claimed = None;
        self.lifecycle.send_if_modified(|lifecycle| {
            if lifecycle.state == StreamState::Running {
                return false;
            }
            lifecycle.state = StreamState::Running;
            lifecycle.run += 1;
            claimed = Some(lifecycle.run);
            true
        });

        match claimed {
            Some(run) => log::debug!("stream run {} started", run),
            None => log::debug!("stream already running, start ignored"),
        }
        claimed
    }

    fn is_current(&self, run: u64) -> bool {
        self.lifecycle.borrow().is_running(run)
    }

    async fn read_loop<R>(&self, mut source: R, run: u64)
    where
        R: AsyncRead + Unpin,
    {
        let mut lifecycle = self.lifecycle.subscribe();
        let mut decoder = ChunkDecoder::new(self.encoding);
        let mut buffer = vec![0u8; self.config.buffer_size];
        let mut leftover: Option<String> = None;

        while self.is_current(run) {
            // `read` is cancel-safe: losing the race to a stop consumes no bytes
            let read = tokio::select! {
                biased;
                _ = async {
                    let _ = lifecycle.wait_for(|current| !current.is_running(run)).await;
                } => break,
                read = source.read(&mut buffer) => read,
            };

            let bytes_read = match read {
                Ok(bytes_read) => bytes_read,
                Err(err) => {
                    log::warn!("read failed, treating as end of stream: {}", err);
                    0
                }
            };

            if bytes_read == 0 {
                self.finish_run(run, &mut decoder, leftover.take());
                return;
            }

            let text = decoder.decode(&buffer[..bytes_read]);
            let tokens = self.tokenizer.process_words(&text, leftover.as_deref());
            log::trace!(
                "run {}: {} bytes, {} words, leftover {:?}",
                run,
                bytes_read,
                tokens.words.len(),
                tokens.leftover
            );

            {
                let mut collection = self.collection.lock();
                collection.add_string(&text);
                collection.add_words(&tokens.words);
            }
            leftover = tokens.leftover;

            tokio::task::yield_now().await;
        }

        log::debug!("stream run {} stopped", run);
    }

    /// End of stream: flush the decoder, count the final fragment, stop
    fn finish_run(&self, run: u64, decoder: &mut ChunkDecoder, leftover: Option<String>) {
        let tail = decoder.finish();

        {
            let mut collection = self.collection.lock();
            let leftover = if tail.is_empty() {
                leftover
            } else {
                let tokens = self.tokenizer.process_words(&tail, leftover.as_deref());
                collection.add_string(&tail);
                collection.add_words(&tokens.words);
                tokens.leftover
            };

            if let Some(word) = leftover.filter(|word| !word.is_empty()) {
                collection.add_word(&word);
            }
        }

        self.lifecycle.send_if_modified(|lifecycle| {
            if !lifecycle.is_running(run) {
                return false;
            }
            lifecycle.state = StreamState::Stopped;
            true
        });
        log::debug!("stream run {} reached end of stream", run);
    }
}
