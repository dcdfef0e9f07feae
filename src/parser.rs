//! In-memory transcript parser.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::DateOrder;
//! use chatstats::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::new(DateOrder::MonthFirst);
//! let records = parser.parse_str(
//!     "1/1/23, 9:00 AM - Alice: Hello\n\
//!      world\n\
//!      1/1/23, 9:01 AM - Bob: Hi Alice",
//! );
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].body(), "Hello world");
//! assert_eq!(records[1].author(), "Bob");
//! ```
//!
//! # Streaming
//!
//! With the `streaming` feature, [`TranscriptParser::stream`] reads a file
//! lazily and yields the same records without loading the whole export:
//!
//! ```rust,no_run
//! # #[cfg(feature = "streaming")]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::config::DateOrder;
//! use chatstats::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::new(DateOrder::DayFirst);
//! for record in parser.stream("chat.txt".as_ref())? {
//!     let record = record?;
//!     println!("{}: {}", record.author(), record.body());
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "streaming"))]
//! # fn main() {}
//! ```

use std::fs;
use std::path::Path;

use crate::config::{DateOrder, ParserConfig};
use crate::error::{ChatstatsError, Result};
use crate::message::MessageRecord;
use crate::parsing::{LineClassifier, ParseStats, RecordAssembler};

#[cfg(feature = "streaming")]
use crate::streaming::{StreamingConfig, TranscriptIterator, TranscriptStreamingParser};

/// Parser for WhatsApp "Export chat" text files.
///
/// Parsing never fails on content: malformed lines become continuations,
/// bad dates become the unparseable sentinel, and empty input gives an
/// empty vector. Only construction and file access return errors.
#[derive(Debug, Clone)]
pub struct TranscriptParser {
    classifier: LineClassifier,
}

impl TranscriptParser {
    /// Creates a parser with default settings for the given date convention.
    pub fn new(date_order: DateOrder) -> Self {
        let classifier = LineClassifier::new(ParserConfig::new(date_order))
            .expect("built-in header pattern is valid");
        Self { classifier }
    }

    /// Creates a parser with custom configuration.
    ///
    /// Fails if the configured meridiem markers cannot be compiled into a
    /// header pattern.
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        Ok(Self {
            classifier: LineClassifier::new(config)?,
        })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        self.classifier.config()
    }

    /// Parses a whole export held in memory.
    pub fn parse_str(&self, content: &str) -> Vec<MessageRecord> {
        self.parse_str_with_stats(content).0
    }

    /// Like [`parse_str`](Self::parse_str), also returning the pass counters.
    pub fn parse_str_with_stats(&self, content: &str) -> (Vec<MessageRecord>, ParseStats) {
        let mut assembler = RecordAssembler::new(self.classifier.clone());
        let mut records: Vec<MessageRecord> = content
            .lines()
            .filter_map(|line| assembler.push_line(line))
            .collect();
        records.extend(assembler.finish());

        let stats = *assembler.stats();
        tracing::debug!(
            lines = stats.lines,
            records = stats.records,
            continuations = stats.continuations,
            orphans = stats.orphans,
            unparseable = stats.unparseable,
            skipped = stats.skipped,
            "parsed transcript"
        );

        (records, stats)
    }

    /// Reads and parses a UTF-8 export file.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| ChatstatsError::utf8(path.display().to_string(), e))?;
        Ok(self.parse_str(&content))
    }

    /// Streams records from a file with default streaming settings.
    #[cfg(feature = "streaming")]
    pub fn stream(&self, path: &Path) -> Result<TranscriptIterator> {
        self.stream_with(path, StreamingConfig::default())
    }

    /// Streams records from a file with custom streaming settings.
    #[cfg(feature = "streaming")]
    pub fn stream_with(&self, path: &Path, config: StreamingConfig) -> Result<TranscriptIterator> {
        TranscriptStreamingParser::from_classifier(self.classifier.clone(), config).stream(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_empty() {
        let parser = TranscriptParser::new(DateOrder::MonthFirst);
        assert!(parser.parse_str("").is_empty());
        assert!(parser.parse_str("\n\n  \n").is_empty());
    }

    #[test]
    fn test_parse_with_stats() {
        let parser = TranscriptParser::new(DateOrder::MonthFirst);
        let (records, stats) =
            parser.parse_str_with_stats("header junk\n1/1/23, 9:00 AM - Alice: Hi\nthere");
        assert_eq!(records.len(), 1);
        assert_eq!(stats.orphans, 1);
        assert_eq!(stats.continuations, 1);
    }

    #[test]
    fn test_parse_idempotent() {
        let parser = TranscriptParser::new(DateOrder::DayFirst);
        let input = "3/4/23, 10:00 - Ana: hola\nque tal\n3/4/23, 10:05 - Luis: bien";
        assert_eq!(parser.parse_str(input), parser.parse_str(input));
    }

    #[test]
    fn test_with_config() {
        let config = ParserConfig::day_first().with_meridiem_markers(["a. m."], ["p. m."]);
        let parser = TranscriptParser::with_config(config).unwrap();
        let records = parser.parse_str("5/3/23, 4:10 p. m. - Ana: hola");
        assert_eq!(records[0].hour(), Some(16));
        assert_eq!(parser.config().date_order, DateOrder::DayFirst);
    }

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1/1/23, 9:00 AM - Alice: Hello").unwrap();
        writeln!(file, "1/1/23, 9:01 AM - Bob: Hi").unwrap();

        let parser = TranscriptParser::new(DateOrder::MonthFirst);
        let records = parser.parse_file(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_file_missing() {
        let parser = TranscriptParser::new(DateOrder::MonthFirst);
        let err = parser
            .parse_file(Path::new("/nonexistent/chat.txt"))
            .unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_parse_file_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"1/1/23, 9:00 AM - Alice: \xff\xfe").unwrap();

        let parser = TranscriptParser::new(DateOrder::MonthFirst);
        let err = parser.parse_file(file.path()).unwrap_err();
        assert!(matches!(err, ChatstatsError::Utf8 { .. }));
    }

    #[test]
    fn test_parser_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TranscriptParser>();
    }
}
