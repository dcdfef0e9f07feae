//! Output configuration shared by the record writers.

use serde::{Deserialize, Serialize};

use crate::message::MessageRecord;

/// Configuration for output format.
/// Controls which fields and rows are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include timestamps in output
    pub include_timestamps: bool,
    /// Leave out `group_notification` rows
    pub skip_notifications: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    #[must_use]
    pub fn without_notifications(mut self) -> Self {
        self.skip_notifications = true;
        self
    }

    /// Records that should be written, in order.
    pub fn select<'a>(
        &self,
        records: &'a [MessageRecord],
    ) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        let skip = self.skip_notifications;
        records
            .iter()
            .filter(move |r| !(skip && r.is_group_notification()))
    }

    /// Timestamp text for one record, if timestamps are enabled.
    ///
    /// An unparseable timestamp is written as an empty string.
    pub fn timestamp_text(&self, record: &MessageRecord) -> Option<String> {
        self.include_timestamps.then(|| {
            record
                .timestamp()
                .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default()
        })
    }
}
