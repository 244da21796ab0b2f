//! Incremental byte → text decoding
//!
//! Reads can end in the middle of a multi-byte sequence. The decoder keeps
//! such an incomplete tail internally and completes it with the next chunk,
//! so every character is decoded exactly once.

use encoding_rs::{CoderResult, Decoder, Encoding};

/// Streaming decoder for one run of the read loop
pub struct ChunkDecoder {
    decoder: Decoder,
    encoding: &'static Encoding,
    had_errors: bool,
}

impl std::fmt::Debug for ChunkDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkDecoder")
            .field("encoding", &self.encoding.name())
            .field("had_errors", &self.had_errors)
            .finish()
    }
}

impl ChunkDecoder {
    /// Create a decoder; a leading byte order mark is removed
    pub fn new(encoding: &'static Encoding) -> Self {
        Self {
            decoder: encoding.new_decoder_with_bom_removal(),
            encoding,
            had_errors: false,
        }
    }

    /// Decode the next chunk of bytes
    pub fn decode(&mut self, bytes: &[u8]) -> String {
        self.decode_inner(bytes, false)
    }

    /// Flush any incomplete trailing sequence at end of stream
    pub fn finish(&mut self) -> String {
        self.decode_inner(&[], true)
    }

    /// Whether malformed input was replaced with U+FFFD so far
    pub fn had_errors(&self) -> bool {
        self.had_errors
    }

    fn decode_inner(&mut self, bytes: &[u8], last: bool) -> String {
        let mut text = String::new();
        let mut remaining = bytes;

        loop {
            let needed = self
                .decoder
                .max_utf8_buffer_length(remaining.len())
                .unwrap_or(remaining.len().saturating_mul(3).saturating_add(4));
            text.reserve(needed);

            let (result, read, had_errors) =
                self.decoder.decode_to_string(remaining, &mut text, last);
            remaining = &remaining[read..];

            if had_errors && !self.had_errors {
                log::warn!(
                    "malformed {} input replaced with U+FFFD",
                    self.encoding.name()
                );
            }
            self.had_errors |= had_errors;

            match result {
                CoderResult::InputEmpty => break,
                CoderResult::OutputFull => continue,
            }
        }

        text
    }
}
