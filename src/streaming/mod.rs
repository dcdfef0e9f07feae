//! Streaming parser for memory-efficient processing of large exports.
//!
//! Multi-year group chats can produce exports of several hundred megabytes.
//! The streaming parser reads them line by line, holding at most one pending
//! record, and yields exactly the records the in-memory parser would.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatstats::config::DateOrder;
//! use chatstats::streaming::TranscriptStreamingParser;
//!
//! let parser = TranscriptStreamingParser::new(DateOrder::MonthFirst);
//!
//! for result in parser.stream("large_export.txt".as_ref()).unwrap() {
//!     match result {
//!         Ok(record) => println!("{}: {}", record.author(), record.body()),
//!         Err(e) => eprintln!("Skipped invalid input: {}", e),
//!     }
//! }
//! ```
//!
//! # Invalid input
//!
//! With [`StreamingConfig::skip_invalid`] set (the default), lines that are
//! not valid UTF-8 and records larger than
//! [`StreamingConfig::max_message_size`] are dropped with a warning.
//! Otherwise each one is yielded as an `Err` item and iteration continues.

mod traits;
mod transcript;

pub use traits::{RecordIterator, StreamingConfig};
pub use transcript::{TranscriptIterator, TranscriptStreamingParser};
