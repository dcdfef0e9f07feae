//! Core traits for streaming parsers.
//!
//! - [`RecordIterator`] - Iterator with progress tracking
//! - [`StreamingConfig`] - Configuration options

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::MessageRecord;

/// Iterator over records from a streaming parser with progress tracking.
///
/// Extends the standard [`Iterator`] trait with methods for monitoring
/// parsing progress, useful for progress bars and logging.
///
/// # Object Safety
///
/// This trait is object-safe, enabling dynamic dispatch via
/// `Box<dyn RecordIterator>`.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> chatstats::Result<()> {
/// use chatstats::config::DateOrder;
/// use chatstats::streaming::{RecordIterator, TranscriptStreamingParser};
///
/// let parser = TranscriptStreamingParser::new(DateOrder::DayFirst);
/// let mut iter = parser.stream("export.txt".as_ref())?;
///
/// while let Some(result) = iter.next() {
///     let record = result?;
///
///     if let Some(pct) = iter.progress() {
///         eprintln!("\r{:.1}%", pct);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub trait RecordIterator: Iterator<Item = Result<MessageRecord>> + Send {
    /// Returns approximate progress as a percentage (0.0 to 100.0).
    ///
    /// Returns `None` if progress cannot be determined (e.g., unknown file size).
    fn progress(&self) -> Option<f64> {
        None
    }

    /// Returns the number of bytes processed so far.
    fn bytes_processed(&self) -> u64;

    /// Returns the total file size in bytes, if known.
    fn total_bytes(&self) -> Option<u64> {
        None
    }
}

/// Configuration options for streaming parsers.
///
/// # Examples
///
/// ```
/// use chatstats::streaming::StreamingConfig;
///
/// let config = StreamingConfig::new()
///     .with_buffer_size(128 * 1024)  // 128KB buffer
///     .with_skip_invalid(false);      // Return errors instead of skipping
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamingConfig {
    /// Buffer size for file reading.
    ///
    /// Default: 64KB. Larger buffers improve throughput but use more memory.
    pub buffer_size: usize,

    /// Maximum size of a single record body in bytes.
    ///
    /// Default: 10MB. Records exceeding this are skipped or reported.
    pub max_message_size: usize,

    /// Whether to skip invalid lines and oversized records or return errors.
    ///
    /// Default: `true` (skip). Set to `false` for strict validation.
    pub skip_invalid: bool,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024,             // 64KB
            max_message_size: 10 * 1024 * 1024, // 10MB
            skip_invalid: true,
        }
    }
}

impl StreamingConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Sets the maximum record body size.
    #[must_use]
    pub fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_message_size = size;
        self
    }

    /// Sets whether to skip invalid input.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}
