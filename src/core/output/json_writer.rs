//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::message::MessageRecord;

/// Minimal record structure for JSON output.
/// Only includes fields enabled in `OutputConfig`.
#[derive(Serialize)]
pub(super) struct JsonRecord<'a> {
    author: &'a str,
    body: &'a str,
    /// `null` for an unparseable timestamp, absent when disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<Option<String>>,
}

impl<'a> JsonRecord<'a> {
    pub(super) fn from_record(record: &'a MessageRecord, config: &OutputConfig) -> Self {
        Self {
            author: record.author(),
            body: record.body(),
            timestamp: config.include_timestamps.then(|| {
                record
                    .timestamp()
                    .map(|ts| ts.format("%Y-%m-%dT%H:%M:%S").to_string())
            }),
        }
    }
}

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"author": "Alice", "body": "Hello"},
///   {"author": "Bob", "body": "Hi"}
/// ]
/// ```
pub fn write_json(
    records: &[MessageRecord],
    output_path: &Path,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a JSON array string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let json_records: Vec<JsonRecord<'_>> = config
        .select(records)
        .map(|r| JsonRecord::from_record(r, config))
        .collect();

    Ok(serde_json::to_string_pretty(&json_records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    #[test]
    fn test_to_json_basic() {
        let records = vec![
            MessageRecord::new(None, "Alice", "Hello"),
            MessageRecord::new(None, "Bob", "Hi"),
        ];

        let json = to_json(&records, &OutputConfig::new()).unwrap();

        assert!(json.contains(r#""author": "Alice""#));
        assert!(json.contains(r#""body": "Hello""#));
        assert!(!json.contains("timestamp"));
    }

    #[test]
    fn test_write_json_with_timestamps() {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 15).and_then(|d| d.and_hms_opt(12, 30, 0));
        let records = vec![
            MessageRecord::new(ts, "Alice", "Hello"),
            MessageRecord::new(None, "Bob", "undated"),
        ];

        let temp_file = NamedTempFile::new().unwrap();
        let config = OutputConfig::new().with_timestamps();
        write_json(&records, temp_file.path(), &config).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains(r#""timestamp": "2024-06-15T12:30:00""#));
        assert!(content.contains(r#""timestamp": null"#));
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[], &OutputConfig::new()).unwrap(), "[]");
    }
}
