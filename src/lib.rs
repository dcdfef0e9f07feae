//! # chatstats
//!
//! A Rust library for parsing WhatsApp "Export chat" text files into typed
//! message records and computing activity, word and emoji statistics over
//! them.
//!
//! ## Overview
//!
//! An export is a plain-text file with one message per header line:
//!
//! ```text
//! 12/31/22, 11:58 PM - Alice: Happy new year!
//! see you all tomorrow
//! 1/1/23, 12:01 AM - Bob: 🎉🎉
//! 1/1/23, 12:02 AM - Bob added Carol
//! ```
//!
//! A header is a date, a time, an author and `": "`. Every other line is a
//! continuation of the previous message, including dated lines with no
//! author such as `Bob added Carol`. Authors that read like system events
//! are renamed to the synthetic author `group_notification`, and
//! [`ParserConfig::with_event_lines`](config::ParserConfig::with_event_lines)
//! turns authorless dated lines into such records too.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! let parser = TranscriptParser::new(DateOrder::MonthFirst);
//! let records = parser.parse_str(
//!     "12/31/22, 11:58 PM - Alice: Happy new year!\n\
//!      see you all tomorrow\n\
//!      1/1/23, 12:01 AM - Bob: 🎉🎉",
//! );
//!
//! let report = AnalysisReport::build(&records, &AuthorFilter::Overall, &StopWords::empty());
//! assert_eq!(report.stats.messages, 2);
//! let months: Vec<&str> = report.monthly_timeline.keys().collect();
//! assert_eq!(months, ["December-2022", "January-2023"]);
//! assert_eq!(report.emoji.get("🎉"), Some(2));
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), the in-memory entry point
//! - [`parsing`] - Line normalization, header classification, record assembly
//! - [`streaming`] - Line-by-line parsing of large exports (feature `streaming`)
//! - [`stats`] - The statistics engine ([`AnalysisReport`](stats::AnalysisReport) and its parts)
//! - [`config`] - [`ParserConfig`](config::ParserConfig) and [`DateOrder`](config::DateOrder)
//! - [`message`] - [`MessageRecord`] and its derived calendar fields
//! - [`core`] - Record writers and [`OutputConfig`](core::models::OutputConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and [`write_to_format`](format::write_to_format)
//! - [`cli`] - CLI argument types (feature `cli`)
//! - [`error`] - [`ChatstatsError`] and [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod stats;
#[cfg(feature = "streaming")]
pub mod streaming;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use message::{GROUP_NOTIFICATION, MEDIA_OMITTED, MessageRecord};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageRecord;

    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Parsing
    pub use crate::config::{DateOrder, ParserConfig};
    pub use crate::parser::TranscriptParser;

    #[cfg(feature = "streaming")]
    pub use crate::streaming::{RecordIterator, StreamingConfig, TranscriptStreamingParser};

    // Statistics
    pub use crate::stats::{AggregateView, AnalysisReport, AuthorFilter, StopWords};

    // Output
    pub use crate::core::models::OutputConfig;
    pub use crate::format::{OutputFormat, write_to_format};
}
