//! Streaming parser for WhatsApp text exports.
//!
//! Reads the export line by line through a [`BufReader`], holding at most
//! one pending record. Records are identical to those of
//! [`TranscriptParser`](crate::parser::TranscriptParser) for the same input.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::{DateOrder, ParserConfig};
use crate::error::{ChatstatsError, Result};
use crate::message::MessageRecord;
use crate::parsing::{LineClassifier, ParseStats, RecordAssembler};

use super::{RecordIterator, StreamingConfig};

/// Streaming parser for WhatsApp text exports.
#[derive(Debug, Clone)]
pub struct TranscriptStreamingParser {
    classifier: LineClassifier,
    config: StreamingConfig,
}

impl TranscriptStreamingParser {
    /// Creates a streaming parser with default settings.
    pub fn new(date_order: DateOrder) -> Self {
        let classifier = LineClassifier::new(ParserConfig::new(date_order))
            .expect("built-in header pattern is valid");
        Self::from_classifier(classifier, StreamingConfig::default())
    }

    /// Creates a streaming parser from parser and streaming configuration.
    pub fn with_config(parser: ParserConfig, config: StreamingConfig) -> Result<Self> {
        Ok(Self::from_classifier(LineClassifier::new(parser)?, config))
    }

    pub(crate) fn from_classifier(classifier: LineClassifier, config: StreamingConfig) -> Self {
        Self { classifier, config }
    }

    pub fn parser_config(&self) -> &ParserConfig {
        self.classifier.config()
    }

    pub fn streaming_config(&self) -> &StreamingConfig {
        &self.config
    }

    /// Opens a file and returns an iterator over its records.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::Io`] if the file cannot be opened.
    pub fn stream(&self, path: &Path) -> Result<TranscriptIterator> {
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();
        let reader = BufReader::with_capacity(self.config.buffer_size, file);

        tracing::debug!(path = %path.display(), bytes = file_size, "streaming transcript");
        Ok(TranscriptIterator::new(
            Box::new(reader),
            Some(file_size),
            self.classifier.clone(),
            self.config,
        ))
    }

    /// Streams records from any buffered reader.
    pub fn stream_reader<R>(&self, reader: R) -> TranscriptIterator
    where
        R: BufRead + Send + 'static,
    {
        TranscriptIterator::new(Box::new(reader), None, self.classifier.clone(), self.config)
    }
}

/// Iterator over records of one export.
pub struct TranscriptIterator {
    reader: Box<dyn BufRead + Send>,
    file_size: Option<u64>,
    bytes_read: u64,
    config: StreamingConfig,
    line_buffer: Vec<u8>,
    assembler: RecordAssembler,
    queued: VecDeque<Result<MessageRecord>>,
    finished: bool,
}

impl TranscriptIterator {
    fn new(
        reader: Box<dyn BufRead + Send>,
        file_size: Option<u64>,
        classifier: LineClassifier,
        config: StreamingConfig,
    ) -> Self {
        Self {
            reader,
            file_size,
            bytes_read: 0,
            config,
            line_buffer: Vec::with_capacity(4096),
            assembler: RecordAssembler::new(classifier),
            queued: VecDeque::new(),
            finished: false,
        }
    }

    /// Counters for the lines read so far.
    pub fn stats(&self) -> &ParseStats {
        self.assembler.stats()
    }

    /// Reads one raw line. `Ok(None)` means end of input.
    fn read_line(&mut self) -> std::io::Result<Option<Vec<u8>>> {
        self.line_buffer.clear();
        let bytes = self.reader.read_until(b'\n', &mut self.line_buffer)?;
        if bytes == 0 {
            return Ok(None);
        }
        self.bytes_read += bytes as u64;
        Ok(Some(std::mem::take(&mut self.line_buffer)))
    }

    fn process_line(&mut self, raw: Vec<u8>) {
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                let lossy = String::from_utf8_lossy(e.as_bytes()).into_owned();
                if let Some(record) = self.assembler.skip_line(&lossy) {
                    self.queued.push_back(Ok(record));
                }
                if self.config.skip_invalid {
                    tracing::warn!(offset = self.bytes_read, "skipping line with invalid UTF-8");
                } else {
                    let context = format!("line ending at byte {}", self.bytes_read);
                    self.queued.push_back(Err(ChatstatsError::utf8(context, e)));
                }
                return;
            }
        };

        if let Some(record) = self.assembler.push_line(&line) {
            self.queued.push_back(Ok(record));
        }

        let size = self.assembler.pending_body_len();
        if size > self.config.max_message_size {
            self.assembler.discard_pending();
            if self.config.skip_invalid {
                tracing::warn!(
                    size,
                    max = self.config.max_message_size,
                    "skipping oversized message"
                );
            } else {
                self.queued.push_back(Err(ChatstatsError::buffer_overflow(
                    self.config.max_message_size,
                    size,
                )));
            }
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        if let Some(record) = self.assembler.finish() {
            self.queued.push_back(Ok(record));
        }

        let stats = self.assembler.stats();
        tracing::debug!(
            lines = stats.lines,
            records = stats.records,
            continuations = stats.continuations,
            orphans = stats.orphans,
            unparseable = stats.unparseable,
            skipped = stats.skipped,
            "streamed transcript"
        );
    }
}

impl RecordIterator for TranscriptIterator {
    fn progress(&self) -> Option<f64> {
        match self.file_size {
            Some(0) | None => None,
            Some(total) => Some((self.bytes_read as f64 / total as f64) * 100.0),
        }
    }

    fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    fn total_bytes(&self) -> Option<u64> {
        self.file_size
    }
}

impl Iterator for TranscriptIterator {
    type Item = Result<MessageRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.queued.pop_front() {
                return Some(item);
            }
            if self.finished {
                return None;
            }

            match self.read_line() {
                Ok(Some(raw)) => self.process_line(raw),
                Ok(None) => self.finish(),
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

impl std::fmt::Debug for TranscriptIterator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriptIterator")
            .field("file_size", &self.file_size)
            .field("bytes_read", &self.bytes_read)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
