//! Output side of chatstats.
//!
//! This module contains:
//! - [`models`] - [`OutputConfig`], which fields and rows are written
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatstats::core::{OutputConfig, to_csv, to_json, to_jsonl};
//! # }
//! ```

pub mod models;
pub mod output;

pub use models::OutputConfig;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, view_to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
