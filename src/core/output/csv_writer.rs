//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::message::MessageRecord;
use crate::stats::AggregateView;

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on OutputConfig
///   - Basic: `Author`, `Body`
///   - With timestamps: `Timestamp`, `Author`, `Body`
/// - Encoding: UTF-8
pub fn write_csv(
    records: &[MessageRecord],
    output_path: &Path,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(records, file, config)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to
/// a file.
pub fn to_csv(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(
    records: &[MessageRecord],
    sink: W,
    config: &OutputConfig,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;
    for record in config.select(records) {
        writer.write_record(build_record(record, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.push("Author");
    header.push("Body");

    header
}

/// Build CSV row for a single record.
fn build_record(record: &MessageRecord, config: &OutputConfig) -> Vec<String> {
    let mut row = Vec::new();

    if let Some(ts) = config.timestamp_text(record) {
        row.push(ts);
    }

    row.push(record.author().to_string());
    row.push(record.body().to_string());

    row
}

/// Converts an aggregate view to a two-column CSV string.
///
/// The header is the view's dimension followed by `count`.
pub fn view_to_csv(view: &AggregateView) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record([view.dimension().to_string().as_str(), "count"])?;
    for (key, count) in view.iter() {
        writer.write_record([key, count.to_string().as_str()])?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(buffer)?)
}
