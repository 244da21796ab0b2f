//! JSON output formatter

use super::ReportFormatter;
use anyhow::Result;
use std::io::Write;
use wordstream_engine::CollectionSnapshot;

/// JSON formatter - writes the snapshot as one JSON document
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn write_report(&mut self, snapshot: &CollectionSnapshot) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, snapshot)?;
        } else {
            serde_json::to_writer(&mut self.writer, snapshot)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::sample_snapshot;

    #[test]
    fn test_json_report_is_a_snapshot() {
        let snapshot = sample_snapshot();
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer, false)
            .write_report(&snapshot)
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);

        let parsed: CollectionSnapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_pretty_json() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer, true)
            .write_report(&sample_snapshot())
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["num_words"], 4);
        assert_eq!(value["rankings"][0]["name"], "most_frequent");
        assert_eq!(value["rankings"][0]["entries"][0]["word"], "the");
    }
}
