//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`DateOrder`] - Date convention of the export
//! - [`OutputFormat`] - Export format options
//!
//! The value enums here only exist so clap can list and parse them; they
//! convert into the library's own [`config::DateOrder`](crate::config::DateOrder)
//! and [`format::OutputFormat`](crate::format::OutputFormat).
//!
//! ```rust
//! use chatstats::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatstats", "chat.txt", "-d", "mdy", "-u", "Alice"]);
//! assert_eq!(args.author_filter().author(), Some("Alice"));
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
use crate::core::models::OutputConfig;
use crate::stats::{AuthorFilter, OVERALL};

/// Parse a WhatsApp chat export and print activity, word and emoji
/// statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat.txt -d month-first
    chatstats chat.txt -d dmy -u Alice --stop-words stop_hinglish.txt
    chatstats chat.txt -d mdy --json > report.json
    chatstats chat.txt -d mdy --export messages.jsonl -t
    chatstats chat.txt -d dmy --list-users")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Date convention of the export
    #[arg(short, long, value_enum)]
    pub date_order: DateOrder,

    /// Analyze a single author (default: everyone)
    #[arg(short, long, value_name = "NAME", default_value = OVERALL)]
    pub user: String,

    /// Word list to leave out of the word statistics
    #[arg(long, value_name = "PATH")]
    pub stop_words: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the parsed records to this file
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export format (default: from the export file extension, else csv)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include timestamps in the export
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Leave group notifications out of the export
    #[arg(long)]
    pub skip_notifications: bool,

    /// Read the input line by line instead of loading it whole
    #[arg(long)]
    pub streaming: bool,

    /// Start a group notification record for dated lines without an author
    #[arg(long)]
    pub event_lines: bool,

    /// Extra marker meaning AM (repeatable)
    #[arg(long, value_name = "MARKER")]
    pub am: Vec<String>,

    /// Extra marker meaning PM (repeatable)
    #[arg(long, value_name = "MARKER")]
    pub pm: Vec<String>,

    /// Print the author filter options and exit
    #[arg(long)]
    pub list_users: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parser configuration described by the arguments.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new(self.date_order.into())
            .with_meridiem_markers(self.am.iter().cloned(), self.pm.iter().cloned())
            .with_event_lines(self.event_lines)
    }

    /// The `--user` value as a filter.
    pub fn author_filter(&self) -> AuthorFilter {
        AuthorFilter::from(self.user.clone())
    }

    /// What to write when exporting records.
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            include_timestamps: self.timestamps,
            skip_notifications: self.skip_notifications,
        }
    }

    /// Format for `--export`: explicit `--format`, then the file extension,
    /// then CSV.
    pub fn export_format(&self) -> crate::format::OutputFormat {
        self.format.map(Into::into).unwrap_or_else(|| {
            self.export
                .as_deref()
                .and_then(|path| crate::format::OutputFormat::from_path(path).ok())
                .unwrap_or_default()
        })
    }

    /// Log level used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Date convention of the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// DD/MM/YY
    #[value(alias = "dmy")]
    #[serde(alias = "dmy")]
    DayFirst,

    /// MM/DD/YY
    #[value(alias = "mdy")]
    #[serde(alias = "mdy")]
    MonthFirst,
}

impl From<DateOrder> for crate::config::DateOrder {
    fn from(order: DateOrder) -> crate::config::DateOrder {
        match order {
            DateOrder::DayFirst => crate::config::DateOrder::DayFirst,
            DateOrder::MonthFirst => crate::config::DateOrder::MonthFirst,
        }
    }
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one record per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
