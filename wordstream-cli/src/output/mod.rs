//! Output formatting module

use anyhow::Result;
use wordstream_engine::CollectionSnapshot;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Write the report for one snapshot and flush
    fn write_report(&mut self, snapshot: &CollectionSnapshot) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Printable form of a character in reports
pub(crate) fn display_char(ch: char) -> String {
    match ch {
        ' ' => "' '".to_string(),
        '\t' => "\\t".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        _ => ch.to_string(),
    }
}

#[cfg(test)]
pub(crate) fn sample_snapshot() -> CollectionSnapshot {
    use wordstream_engine::{share, Longest, MostFrequent, WordCollection};

    let mut collection = WordCollection::new();
    collection.add_stat(&share(MostFrequent::new(2).unwrap()));
    collection.add_stat(&share(Longest::new(1).unwrap()));
    collection.add_string("the cat the hat");
    collection.add_words(["the", "cat", "the", "hat"]);
    collection.snapshot(2)
}
