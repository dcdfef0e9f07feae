//! JSON Lines (JSONL) output writer.
//!
//! One record per line, convenient for very large exports and for tools
//! that read records one at a time.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::json_writer::JsonRecord;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::message::MessageRecord;

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"author":"Alice","body":"Hello"}
/// {"author":"Bob","body":"Hi"}
/// ```
pub fn write_jsonl(
    records: &[MessageRecord],
    output_path: &Path,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(
    records: &[MessageRecord],
    writer: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    for record in config.select(records) {
        serde_json::to_writer(&mut *writer, &JsonRecord::from_record(record, config))?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
