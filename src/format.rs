//! Export formats for parsed records.
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatstats::Result<()> {
//! use chatstats::config::DateOrder;
//! use chatstats::core::models::OutputConfig;
//! use chatstats::format::{OutputFormat, write_to_format};
//! use chatstats::parser::TranscriptParser;
//!
//! let records = TranscriptParser::new(DateOrder::DayFirst).parse_file("chat.txt".as_ref())?;
//! let target = "chat.jsonl";
//! write_to_format(
//!     &records,
//!     target.as_ref(),
//!     OutputFormat::from_path(target)?,
//!     &OutputConfig::new().with_timestamps(),
//! )?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::models::OutputConfig;
use crate::error::{ChatstatsError, Result};
use crate::message::MessageRecord;

/// How exported records are laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Author;Body` rows, with an optional leading `Timestamp` column
    #[default]
    Csv,

    /// One JSON array holding every record
    Json,

    /// One record object per line
    Jsonl,
}

impl OutputFormat {
    /// Picks the format from the export file's extension, ignoring case.
    ///
    /// ```rust
    /// use chatstats::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("export/chat.NDJSON").unwrap(), OutputFormat::Jsonl);
    /// assert!(OutputFormat::from_path("chat.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        Self::from_name(ext).ok_or_else(|| {
            ChatstatsError::invalid_format(
                "output",
                format!("cannot export to '.{ext}' files, use .csv, .json or .jsonl"),
            )
        })
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            "jsonl" | "ndjson" => Some(OutputFormat::Jsonl),
            _ => None,
        }
    }

    fn feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Csv => "CSV",
            OutputFormat::Json => "JSON",
            OutputFormat::Jsonl => "JSONL",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = ChatstatsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| {
            ChatstatsError::invalid_format(
                "output",
                format!("unknown export format '{s}', use csv, json or jsonl"),
            )
        })
    }
}

/// Writes `records` to `path` with the writer for `format`.
///
/// Fails when the writer's cargo feature is disabled or the file cannot be
/// written.
#[allow(unused_variables)]
pub fn write_to_format(
    records: &[MessageRecord],
    path: &Path,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    tracing::debug!(records = records.len(), %format, path = %path.display(), "exporting records");

    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(ChatstatsError::invalid_format(
            "output",
            format!("{format} export needs the '{}' feature", format.feature()),
        )),
    }
}
