//! Record assembly shared by the in-memory and streaming parsers.
//!
//! [`LineClassifier`] turns one raw line into a [`LineKind`];
//! [`RecordAssembler`] keeps at most one pending record and hands it out
//! once the next header (or the end of input) shows that it is complete.

use chrono::NaiveDateTime;

use super::line::{HeaderLine, HeaderPattern, LineKind, normalize_line};
use super::notification::is_notification_text;
use super::timestamp::parse_timestamp;
use crate::config::ParserConfig;
use crate::error::Result;
use crate::message::{GROUP_NOTIFICATION, MEDIA_OMITTED, MessageRecord};

/// Header pattern plus the configuration it was built from.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    pattern: HeaderPattern,
    config: ParserConfig,
}

impl LineClassifier {
    /// Compiles the header pattern for `config`.
    pub fn new(config: ParserConfig) -> Result<Self> {
        let pattern = HeaderPattern::new(&config.meridiem)?.with_event_lines(config.event_lines);
        Ok(Self { pattern, config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Classifies an already normalized line.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        self.pattern.classify(line)
    }

    /// Resolves the author of a header line.
    ///
    /// Returns the author and the body the record starts with. Event lines
    /// (when enabled) and notification-like authors become
    /// [`GROUP_NOTIFICATION`] with the full text after the dash as body.
    fn author_and_body<'a>(&self, header: &HeaderLine<'a>) -> (&'a str, &'a str) {
        match header.author {
            None => (GROUP_NOTIFICATION, header.remainder),
            Some("") => (GROUP_NOTIFICATION, header.message),
            Some(author)
                if self.config.classify_notifications
                    && is_notification_text(author, &self.config.notification_phrases) =>
            {
                (GROUP_NOTIFICATION, header.remainder)
            }
            Some(author) => (author, header.message),
        }
    }

    fn timestamp(&self, header: &HeaderLine<'_>) -> Option<NaiveDateTime> {
        parse_timestamp(
            header.date,
            header.clock,
            header.meridiem,
            self.config.date_order,
            &self.config.meridiem,
        )
    }
}

/// Counters collected during one parse pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Lines read, blank ones included.
    pub lines: usize,
    /// Records emitted.
    pub records: usize,
    /// Non-blank lines appended to a previous record.
    pub continuations: usize,
    /// Non-blank lines seen before the first header and dropped.
    pub orphans: usize,
    /// Records whose timestamp could not be read.
    pub unparseable: usize,
    /// Lines dropped together with an unreadable or discarded message.
    pub skipped: usize,
}

#[derive(Debug)]
struct PendingRecord {
    timestamp: Option<NaiveDateTime>,
    author: String,
    body: String,
}

impl PendingRecord {
    fn append(&mut self, text: &str) {
        if !self.body.is_empty() {
            self.body.push(' ');
        }
        self.body.push_str(text);
    }
}

/// Line-at-a-time record builder.
///
/// ```
/// use chatstats::config::ParserConfig;
/// use chatstats::parsing::{LineClassifier, RecordAssembler};
///
/// let classifier = LineClassifier::new(ParserConfig::month_first())?;
/// let mut assembler = RecordAssembler::new(classifier);
///
/// assert!(assembler.push_line("1/1/23, 9:00 AM - Alice: Hello").is_none());
/// assert!(assembler.push_line("world").is_none());
/// let record = assembler.finish().unwrap();
/// assert_eq!(record.body(), "Hello world");
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug)]
pub struct RecordAssembler {
    classifier: LineClassifier,
    pending: Option<PendingRecord>,
    /// Set while the message being read was dropped; its continuation
    /// lines are dropped too, up to the next header.
    dropping: bool,
    stats: ParseStats,
}

impl RecordAssembler {
    pub fn new(classifier: LineClassifier) -> Self {
        Self {
            classifier,
            pending: None,
            dropping: false,
            stats: ParseStats::default(),
        }
    }

    /// Feeds one raw line.
    ///
    /// Returns the previous record when `line` starts a new one.
    pub fn push_line(&mut self, line: &str) -> Option<MessageRecord> {
        self.stats.lines += 1;
        let line = normalize_line(line);

        match self.classifier.classify(&line) {
            LineKind::Header(header) => {
                let timestamp = self.classifier.timestamp(&header);
                if timestamp.is_none() {
                    tracing::trace!(line = %line, "unparseable timestamp");
                    self.stats.unparseable += 1;
                }
                let (author, body) = self.classifier.author_and_body(&header);
                tracing::trace!(author, "header line");
                self.dropping = false;

                let next = PendingRecord {
                    timestamp,
                    author: author.to_string(),
                    body: body.to_string(),
                };
                self.pending
                    .replace(next)
                    .map(|done| self.finalize(done))
            }
            LineKind::Continuation("") => None,
            LineKind::Continuation(_) if self.dropping => {
                self.stats.skipped += 1;
                None
            }
            LineKind::Continuation(text) => {
                match self.pending.as_mut() {
                    Some(pending) => {
                        tracing::trace!("continuation line");
                        self.stats.continuations += 1;
                        pending.append(text);
                    }
                    None => {
                        tracing::trace!(line = %text, "orphan line discarded");
                        self.stats.orphans += 1;
                    }
                }
                None
            }
        }
    }

    /// Accounts for a line the caller could not decode.
    ///
    /// `lossy` is the line with undecodable bytes replaced. If it looks like
    /// a header, the pending record is complete and is returned, and the
    /// unreadable message's continuation lines are dropped with it.
    pub fn skip_line(&mut self, lossy: &str) -> Option<MessageRecord> {
        self.stats.lines += 1;
        self.stats.skipped += 1;
        let line = normalize_line(lossy);

        match self.classifier.classify(&line) {
            LineKind::Header(_) => {
                self.dropping = true;
                self.pending.take().map(|done| self.finalize(done))
            }
            LineKind::Continuation(_) => None,
        }
    }

    /// Flushes the last pending record at end of input.
    pub fn finish(&mut self) -> Option<MessageRecord> {
        self.pending.take().map(|done| self.finalize(done))
    }

    /// Byte length of the pending record's body, 0 if none.
    pub fn pending_body_len(&self) -> usize {
        self.pending.as_ref().map_or(0, |p| p.body.len())
    }

    /// Drops the pending record and its remaining continuation lines.
    /// Returns `true` if there was one.
    pub fn discard_pending(&mut self) -> bool {
        let discarded = self.pending.take().is_some();
        self.dropping |= discarded;
        discarded
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    fn finalize(&mut self, pending: PendingRecord) -> MessageRecord {
        self.stats.records += 1;
        let body = if self.classifier.config().is_media_placeholder(&pending.body) {
            MEDIA_OMITTED.to_string()
        } else {
            pending.body
        };
        MessageRecord::new(pending.timestamp, pending.author, body)
    }
}
