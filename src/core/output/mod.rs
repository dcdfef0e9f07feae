//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines (one JSON object per line) - requires `json-output` feature
//! - [`view_to_csv`] - one [`AggregateView`](crate::stats::AggregateView) as CSV - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::core::output::{to_csv, write_csv, write_json, write_jsonl};
//! use chatstats::core::models::OutputConfig;
//! use chatstats::MessageRecord;
//!
//! let records = vec![
//!     MessageRecord::new(None, "Alice", "Hello!"),
//!     MessageRecord::new(None, "Bob", "Hi there!"),
//! ];
//!
//! let config = OutputConfig::new().with_timestamps();
//!
//! // Write to files
//! write_csv(&records, "output.csv".as_ref(), &config)?;
//! write_json(&records, "output.json".as_ref(), &config)?;
//! write_jsonl(&records, "output.jsonl".as_ref(), &config)?;
//!
//! // Or get as strings
//! let csv_string = to_csv(&records, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, view_to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
