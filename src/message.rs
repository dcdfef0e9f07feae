//! The record type produced by the transcript parser.
//!
//! This module provides [`MessageRecord`], one message from a chat export.
//! Records are created once per parse pass and never mutated afterwards;
//! fields are private and everything derived from them (year, month name,
//! weekday, ...) is computed on demand from the stored timestamp.
//!
//! # Sentinels
//!
//! | Field | Sentinel | Meaning |
//! |-------|----------|---------|
//! | `timestamp` | `None` | the header's date/time could not be read |
//! | `author` | [`GROUP_NOTIFICATION`] | system event, no human author |
//! | `body` | [`MEDIA_OMITTED`] | media attachment stripped from the export |
//!
//! # Examples
//!
//! ```
//! use chatstats::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(21, 5, 0)
//!     .unwrap();
//! let record = MessageRecord::new(Some(ts), "Alice", "Hello!");
//!
//! assert_eq!(record.author(), "Alice");
//! assert_eq!(record.month_name(), Some("January"));
//! assert_eq!(record.day_name(), Some("Sunday"));
//! assert_eq!(record.hour(), Some(21));
//! ```

use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Synthetic author for system and group notifications.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Body of a message whose media attachment was left out of the export.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// One message from a chat export.
///
/// # Serialization
///
/// Implements `Serialize` and `Deserialize`. An unparseable timestamp is
/// written as `null`; other timestamps use ISO 8601 without a zone, since
/// exports carry wall-clock time only.
///
/// ```
/// use chatstats::MessageRecord;
///
/// let record = MessageRecord::new(None, "Bob", "hi");
/// let json = serde_json::to_string(&record)?;
/// assert_eq!(json, r#"{"timestamp":null,"author":"Bob","body":"hi"}"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    timestamp: Option<NaiveDateTime>,
    author: String,
    body: String,
}

impl MessageRecord {
    /// Creates a record from its three fields.
    pub fn new(
        timestamp: Option<NaiveDateTime>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            body: body.into(),
        }
    }

    /// Creates a group notification record.
    pub fn notification(timestamp: Option<NaiveDateTime>, body: impl Into<String>) -> Self {
        Self::new(timestamp, GROUP_NOTIFICATION, body)
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the timestamp, or `None` if it was unparseable.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Returns the author name (or [`GROUP_NOTIFICATION`]).
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if the timestamp was parsed.
    pub fn has_timestamp(&self) -> bool {
        self.timestamp.is_some()
    }

    /// Returns `true` for system/group notification records.
    pub fn is_group_notification(&self) -> bool {
        self.author == GROUP_NOTIFICATION
    }

    /// Returns `true` if the body is the media placeholder.
    pub fn is_media(&self) -> bool {
        self.body == MEDIA_OMITTED
    }

    /// Iterates over whitespace-separated words of the body.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.body.split_whitespace()
    }

    // =========================================================================
    // Derived temporal fields
    // =========================================================================

    /// Calendar date of the message.
    pub fn date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|ts| ts.date())
    }

    pub fn year(&self) -> Option<i32> {
        self.timestamp.map(|ts| ts.year())
    }

    /// Month number, 1-12.
    pub fn month(&self) -> Option<u32> {
        self.timestamp.map(|ts| ts.month())
    }

    /// English month name, e.g. `"January"`.
    pub fn month_name(&self) -> Option<&'static str> {
        self.month().map(month_name)
    }

    /// Day of the month, 1-31.
    pub fn day(&self) -> Option<u32> {
        self.timestamp.map(|ts| ts.day())
    }

    pub fn hour(&self) -> Option<u32> {
        self.timestamp.map(|ts| ts.hour())
    }

    pub fn minute(&self) -> Option<u32> {
        self.timestamp.map(|ts| ts.minute())
    }

    pub fn weekday(&self) -> Option<Weekday> {
        self.timestamp.map(|ts| ts.weekday())
    }

    /// English weekday name, e.g. `"Monday"`.
    pub fn day_name(&self) -> Option<&'static str> {
        self.weekday().map(weekday_name)
    }
}

/// Full English name of a month number (1-12).
///
/// Out-of-range numbers fall back to an empty string.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("", |m| m.name())
}

/// Full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
