//! Plain text output formatter

use super::{display_char, ReportFormatter};
use anyhow::Result;
use std::io::Write;
use wordstream_engine::CollectionSnapshot;

/// Plain text formatter - one section per tracker
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn write_report(&mut self, snapshot: &CollectionSnapshot) -> Result<()> {
        writeln!(self.writer, "Words:          {}", snapshot.num_words)?;
        writeln!(self.writer, "Distinct words: {}", snapshot.distinct_words)?;
        writeln!(self.writer, "Characters:     {}", snapshot.num_chars)?;

        if !snapshot.top_chars.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "Top characters:")?;
            for entry in &snapshot.top_chars {
                writeln!(self.writer, "  {:<6} {}", display_char(entry.ch), entry.count)?;
            }
        }

        for ranking in &snapshot.rankings {
            writeln!(self.writer)?;
            writeln!(self.writer, "{} (top {}):", ranking.name, ranking.capacity)?;
            for (rank, entry) in ranking.entries.iter().enumerate() {
                writeln!(self.writer, "  {:>3}. {}", rank + 1, entry)?;
            }
        }

        self.writer.flush()?;
        Ok(())
    }
}
