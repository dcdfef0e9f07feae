//! Line normalization and the header/continuation classifier.

use std::borrow::Cow;

use regex::Regex;

use crate::config::MeridiemMarkers;
use crate::error::{ChatstatsError, Result};

/// Narrow no-break space some exports put before AM/PM.
const NARROW_NBSP: char = '\u{202f}';

/// Byte order mark that may lead the first line of a file.
const BOM: char = '\u{feff}';

/// Trims a raw line and replaces narrow no-break spaces with plain spaces.
pub fn normalize_line(line: &str) -> Cow<'_, str> {
    let trimmed = line.trim_start_matches(BOM).trim();
    if trimmed.contains(NARROW_NBSP) {
        Cow::Owned(trimmed.replace(NARROW_NBSP, " "))
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// Fields extracted from a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    /// `D/M/YY` as written; field order depends on the configured convention.
    pub date: &'a str,
    /// `H:MM` as written.
    pub clock: &'a str,
    /// Meridiem marker as written, if any.
    pub meridiem: Option<&'a str>,
    /// Text before the first `": "`, or `None` for a system event line
    /// (only produced when event lines are enabled).
    pub author: Option<&'a str>,
    /// Message text after the author, or the whole event text.
    pub message: &'a str,
    /// Everything after the ` - ` separator.
    pub remainder: &'a str,
}

/// Result of classifying one normalized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Starts a new record.
    Header(HeaderLine<'a>),
    /// Belongs to the previous record's body.
    Continuation(&'a str),
}

/// Compiled header test for one set of meridiem markers.
#[derive(Debug, Clone)]
pub struct HeaderPattern {
    regex: Regex,
    event_lines: bool,
}

impl HeaderPattern {
    /// Builds the header pattern, accepting the given AM/PM markers.
    ///
    /// A header needs an author followed by `": "`; other dated lines are
    /// continuations unless [`with_event_lines`](Self::with_event_lines)
    /// is enabled.
    pub fn new(markers: &MeridiemMarkers) -> Result<Self> {
        let alternation = markers
            .all_sorted()
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");

        let meridiem = if alternation.is_empty() {
            String::new()
        } else {
            format!(r"(?:\s*((?i:{alternation})))?")
        };

        // date, time (+ optional marker), dash, remainder
        let pattern =
            format!(r"^(\d{{1,2}}/\d{{1,2}}/\d{{2}}),\s*(\d{{1,2}}:\d{{2}}){meridiem}\s*-\s*(.*)$");

        let regex = Regex::new(&pattern)
            .map_err(|e| ChatstatsError::invalid_format("header pattern", e.to_string()))?;

        Ok(Self {
            regex,
            event_lines: false,
        })
    }

    /// Also treats dated lines without `": "` as headers: a trailing `:`
    /// gives an author with an empty message, anything else a system event.
    #[must_use]
    pub fn with_event_lines(mut self, enabled: bool) -> Self {
        self.event_lines = enabled;
        self
    }

    /// Classifies a normalized line.
    ///
    /// The author is the shortest prefix of the remainder ending at `": "`.
    /// Author names that themselves contain `": "` are split at the wrong
    /// place; the export format has no escaping, so this is not recoverable.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        let Some(caps) = self.regex.captures(line) else {
            return LineKind::Continuation(line);
        };

        let date = caps.get(1).map_or("", |m| m.as_str());
        let clock = caps.get(2).map_or("", |m| m.as_str());
        let (meridiem, remainder) = if caps.len() > 4 {
            (caps.get(3).map(|m| m.as_str()), caps.get(4))
        } else {
            (None, caps.get(3))
        };
        let remainder = remainder.map_or("", |m| m.as_str());

        let (author, message) = match remainder.split_once(": ") {
            Some((author, message)) => (Some(author.trim()), message),
            None if !self.event_lines => return LineKind::Continuation(line),
            None => match remainder.strip_suffix(':') {
                Some(author) => (Some(author.trim()), ""),
                None => (None, remainder),
            },
        };

        LineKind::Header(HeaderLine {
            date,
            clock,
            meridiem,
            author,
            message,
            remainder,
        })
    }

    /// Returns `true` if the normalized line starts a new record.
    pub fn is_header(&self, line: &str) -> bool {
        matches!(self.classify(line), LineKind::Header(_))
    }
}
