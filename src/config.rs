//! Configuration types for the transcript parser.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! Exports vary by locale, and the parser cannot reliably tell `3/4/23`
//! (3 April) from `3/4/23` (March 4) by looking at it. The date convention
//! is therefore a required part of every [`ParserConfig`]; there is no
//! default and no auto-detection.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{DateOrder, ParserConfig};
//! use chatstats::parser::TranscriptParser;
//!
//! let config = ParserConfig::new(DateOrder::DayFirst)
//!     .with_meridiem_markers(["a. m."], ["p. m."])
//!     .with_media_placeholder("<Multimedia omitido>");
//!
//! let parser = TranscriptParser::with_config(config)?;
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::message::MEDIA_OMITTED;

/// Order of the day and month fields in `D/M/YY` export dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `DD/MM/YY`, used by most non-US locales.
    DayFirst,
    /// `MM/DD/YY`, used by US-English exports.
    MonthFirst,
}

impl DateOrder {
    /// Chrono format for the `D/M/YY` date field.
    pub fn date_format(self) -> &'static str {
        match self {
            DateOrder::DayFirst => "%d/%m/%y",
            DateOrder::MonthFirst => "%m/%d/%y",
        }
    }

    /// Returns all supported names.
    pub fn all_names() -> &'static [&'static str] {
        &["day-first", "dmy", "month-first", "mdy"]
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOrder::DayFirst => write!(f, "day-first"),
            DateOrder::MonthFirst => write!(f, "month-first"),
        }
    }
}

impl FromStr for DateOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day-first" | "dayfirst" | "dmy" => Ok(DateOrder::DayFirst),
            "month-first" | "monthfirst" | "mdy" => Ok(DateOrder::MonthFirst),
            _ => Err(format!(
                "Unknown date order: '{}'. Expected one of: {}",
                s,
                DateOrder::all_names().join(", ")
            )),
        }
    }
}

/// Half of the day named by a meridiem marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// The canonical marker understood by chrono's `%p`.
    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// Markers that may follow the time in a header line.
///
/// `AM`/`PM` are always recognized, case-insensitively. Locales that write
/// something else (`a. m.`, `vorm.`) add their markers here; the parser
/// maps them back to AM/PM before reading the time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeridiemMarkers {
    /// Markers meaning "before noon".
    pub am: Vec<String>,
    /// Markers meaning "after noon".
    pub pm: Vec<String>,
}

impl Default for MeridiemMarkers {
    fn default() -> Self {
        Self {
            am: vec!["AM".to_string()],
            pm: vec!["PM".to_string()],
        }
    }
}

impl MeridiemMarkers {
    /// Resolves a matched marker to AM or PM, ignoring case and spacing.
    pub fn resolve(&self, marker: &str) -> Option<Meridiem> {
        let wanted = fold_marker(marker);
        if self.am.iter().any(|m| fold_marker(m) == wanted) {
            Some(Meridiem::Am)
        } else if self.pm.iter().any(|m| fold_marker(m) == wanted) {
            Some(Meridiem::Pm)
        } else {
            None
        }
    }

    /// All markers, longest first so that alternation prefers the longest.
    pub fn all_sorted(&self) -> Vec<&str> {
        let mut all: Vec<&str> = self
            .am
            .iter()
            .chain(self.pm.iter())
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .collect();
        all.sort_by_key(|m| std::cmp::Reverse(m.len()));
        all.dedup();
        all
    }
}

fn fold_marker(marker: &str) -> String {
    marker
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatstats::config::{DateOrder, ParserConfig};
///
/// let config = ParserConfig::month_first()
///     .with_notification_phrase("pinned a message");
/// assert_eq!(config.date_order, DateOrder::MonthFirst);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Day-first or month-first dates. Always explicit.
    pub date_order: DateOrder,

    /// Recognized AM/PM markers (default: `AM`, `PM`).
    pub meridiem: MeridiemMarkers,

    /// Normalize notification authors to `group_notification` (default: true)
    pub classify_notifications: bool,

    /// Read dated lines without `": "` (`Alice added Bob`) as system events
    /// instead of continuations (default: false).
    #[serde(default)]
    pub event_lines: bool,

    /// Extra notification phrases on top of the built-in English list.
    pub notification_phrases: Vec<String>,

    /// Bodies that mean "media omitted" (default: `<Media omitted>`).
    pub media_placeholders: Vec<String>,
}

impl ParserConfig {
    /// Creates a configuration for the given date convention.
    pub fn new(date_order: DateOrder) -> Self {
        Self {
            date_order,
            meridiem: MeridiemMarkers::default(),
            classify_notifications: true,
            event_lines: false,
            notification_phrases: Vec::new(),
            media_placeholders: vec![MEDIA_OMITTED.to_string()],
        }
    }

    /// Shorthand for `ParserConfig::new(DateOrder::DayFirst)`.
    pub fn day_first() -> Self {
        Self::new(DateOrder::DayFirst)
    }

    /// Shorthand for `ParserConfig::new(DateOrder::MonthFirst)`.
    pub fn month_first() -> Self {
        Self::new(DateOrder::MonthFirst)
    }

    /// Sets the date convention.
    #[must_use]
    pub fn with_date_order(mut self, date_order: DateOrder) -> Self {
        self.date_order = date_order;
        self
    }

    /// Adds locale-specific AM/PM markers.
    #[must_use]
    pub fn with_meridiem_markers<A, P>(
        mut self,
        am: impl IntoIterator<Item = A>,
        pm: impl IntoIterator<Item = P>,
    ) -> Self
    where
        A: Into<String>,
        P: Into<String>,
    {
        self.meridiem.am.extend(am.into_iter().map(Into::into));
        self.meridiem.pm.extend(pm.into_iter().map(Into::into));
        self
    }

    /// Enables or disables notification author classification.
    #[must_use]
    pub fn with_classify_notifications(mut self, enabled: bool) -> Self {
        self.classify_notifications = enabled;
        self
    }

    /// Starts a `group_notification` record for each dated line that has no
    /// author, instead of appending it to the previous message.
    #[must_use]
    pub fn with_event_lines(mut self, enabled: bool) -> Self {
        self.event_lines = enabled;
        self
    }

    /// Adds a phrase that marks an author string as a group notification.
    #[must_use]
    pub fn with_notification_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.notification_phrases.push(phrase.into());
        self
    }

    /// Adds a body that should be read as the media placeholder.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholders.push(placeholder.into());
        self
    }

    /// Returns `true` if `body` is one of the configured media placeholders.
    pub fn is_media_placeholder(&self, body: &str) -> bool {
        self.media_placeholders.iter().any(|p| p == body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_order_from_str() {
        assert_eq!("day-first".parse::<DateOrder>().unwrap(), DateOrder::DayFirst);
        assert_eq!("DMY".parse::<DateOrder>().unwrap(), DateOrder::DayFirst);
        assert_eq!(
            "month-first".parse::<DateOrder>().unwrap(),
            DateOrder::MonthFirst
        );
        assert_eq!("mdy".parse::<DateOrder>().unwrap(), DateOrder::MonthFirst);
        assert!("ymd".parse::<DateOrder>().is_err());
    }

    #[test]
    fn test_date_order_display_roundtrip() {
        for order in [DateOrder::DayFirst, DateOrder::MonthFirst] {
            assert_eq!(order.to_string().parse::<DateOrder>().unwrap(), order);
        }
    }

    #[test]
    fn test_meridiem_resolve_default() {
        let markers = MeridiemMarkers::default();
        assert_eq!(markers.resolve("AM"), Some(Meridiem::Am));
        assert_eq!(markers.resolve("pm"), Some(Meridiem::Pm));
        assert_eq!(markers.resolve("a. m."), None);
    }

    #[test]
    fn test_meridiem_resolve_locale() {
        let config = ParserConfig::day_first().with_meridiem_markers(["a. m."], ["p. m."]);
        assert_eq!(config.meridiem.resolve("A. M."), Some(Meridiem::Am));
        assert_eq!(config.meridiem.resolve("p.  m."), Some(Meridiem::Pm));
    }

    #[test]
    fn test_meridiem_sorted_longest_first() {
        let config = ParserConfig::day_first().with_meridiem_markers(["a. m."], ["p. m."]);
        let sorted = config.meridiem.all_sorted();
        assert_eq!(sorted.len(), 4);
        assert!(sorted[0].len() >= sorted[3].len());
    }

    #[test]
    fn test_parser_config_defaults() {
        let config = ParserConfig::month_first();
        assert_eq!(config.date_order, DateOrder::MonthFirst);
        assert!(config.classify_notifications);
        assert!(!config.event_lines);
        assert!(config.notification_phrases.is_empty());
        assert!(config.is_media_placeholder("<Media omitted>"));
        assert!(!config.is_media_placeholder("<media omitted>"));
    }

    #[test]
    fn test_parser_config_builder() {
        let config = ParserConfig::day_first()
            .with_date_order(DateOrder::MonthFirst)
            .with_classify_notifications(false)
            .with_event_lines(true)
            .with_notification_phrase("pinned a message")
            .with_media_placeholder("image omitted");

        assert_eq!(config.date_order, DateOrder::MonthFirst);
        assert!(!config.classify_notifications);
        assert!(config.event_lines);
        assert_eq!(config.notification_phrases, vec!["pinned a message"]);
        assert!(config.is_media_placeholder("image omitted"));
    }

    #[test]
    fn test_date_order_serde() {
        let json = serde_json::to_string(&DateOrder::DayFirst).unwrap();
        assert_eq!(json, "\"day-first\"");
    }

    #[test]
    fn test_parser_config_without_event_lines_field() {
        let mut value = serde_json::to_value(ParserConfig::day_first()).unwrap();
        value.as_object_mut().unwrap().remove("event_lines");
        let config: ParserConfig = serde_json::from_value(value).unwrap();
        assert!(!config.event_lines);
    }
}
