//! Markdown output formatter

use super::{display_char, ReportFormatter};
use anyhow::Result;
use std::io::Write;
use wordstream_engine::CollectionSnapshot;

/// Markdown formatter - one table per tracker
pub struct MarkdownFormatter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportFormatter for MarkdownFormatter<W> {
    fn write_report(&mut self, snapshot: &CollectionSnapshot) -> Result<()> {
        writeln!(self.writer, "# Word statistics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|---|---|")?;
        writeln!(self.writer, "| Words | {} |", snapshot.num_words)?;
        writeln!(self.writer, "| Distinct words | {} |", snapshot.distinct_words)?;
        writeln!(self.writer, "| Characters | {} |", snapshot.num_chars)?;

        if !snapshot.top_chars.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "## Top characters")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Character | Count |")?;
            writeln!(self.writer, "|---|---|")?;
            for entry in &snapshot.top_chars {
                writeln!(
                    self.writer,
                    "| `{}` | {} |",
                    display_char(entry.ch),
                    entry.count
                )?;
            }
        }

        for ranking in &snapshot.rankings {
            writeln!(self.writer)?;
            writeln!(self.writer, "## {}", ranking.name)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| # | Word | Value |")?;
            writeln!(self.writer, "|---|---|---|")?;
            for (rank, entry) in ranking.entries.iter().enumerate() {
                writeln!(
                    self.writer,
                    "| {} | {} | {} |",
                    rank + 1,
                    entry.word,
                    entry.metric
                )?;
            }
        }

        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::sample_snapshot;

    #[test]
    fn test_markdown_tables() {
        let mut buffer = Vec::new();
        MarkdownFormatter::new(&mut buffer)
            .write_report(&sample_snapshot())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Word statistics\n"));
        assert!(text.contains("| Words | 4 |"));
        assert!(text.contains("## most_frequent\n\n| # | Word | Value |\n|---|---|---|\n| 1 | the | 2 |\n"));
        assert!(text.contains("| `' '` | 3 |"));
    }
}
