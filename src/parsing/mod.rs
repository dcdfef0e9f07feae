//! Shared parsing building blocks.
//!
//! This module contains the line classifier and record assembler used by
//! both the in-memory ([`TranscriptParser`](crate::parser::TranscriptParser))
//! and the streaming parser, so that the two always agree.

pub mod assembler;
pub mod line;
pub mod notification;
pub mod timestamp;

pub use assembler::{LineClassifier, ParseStats, RecordAssembler};
pub use line::{HeaderLine, HeaderPattern, LineKind, normalize_line};
pub use notification::{NOTIFICATION_PHRASES, is_notification_text};
pub use timestamp::{clock_format, parse_timestamp};
