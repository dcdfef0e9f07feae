//! Benchmarks for chatstats parsing and statistics.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- streaming`

use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatstats::config::DateOrder;
use chatstats::core::OutputConfig;
use chatstats::core::output::{to_csv, to_jsonl};
use chatstats::parser::TranscriptParser;
use chatstats::stats::{
    AnalysisReport, AuthorFilter, StopWords, busy_users, emoji_frequency, monthly_timeline,
    most_common_words,
};
use chatstats::streaming::TranscriptStreamingParser;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_transcript(count: usize) -> String {
    let mut lines = Vec::with_capacity(count + count / 5);
    for i in 0..count {
        let author = match i % 3 {
            0 => "Alice",
            1 => "Bob",
            _ => "Carol",
        };
        let month = (i / 500) % 12 + 1;
        let day = (i / 20) % 28 + 1;
        let hour = i % 12 + 1;
        let minute = i % 60;
        let meridiem = if i % 2 == 0 { "AM" } else { "PM" };
        lines.push(format!(
            "{}/{}/23, {}:{:02} {} - {}: Message number {} with a link https://example.com 🎉",
            month, day, hour, minute, meridiem, author, i
        ));
        if i % 5 == 0 {
            lines.push("and a continuation line".to_string());
        }
        if i % 100 == 0 {
            lines.push(format!("{}/{}/23, 9:00 AM - {} added Dave", month, day, author));
        }
    }
    lines.join("\n")
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_parse_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_str");
    let parser = TranscriptParser::new(DateOrder::MonthFirst);

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let records = parser.parse_str(black_box(txt));
                black_box(records)
            });
        });
    }

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");
    let parser = TranscriptStreamingParser::new(DateOrder::MonthFirst);

    for size in [1_000_usize, 10_000, 50_000] {
        let txt = generate_transcript(size);
        group.throughput(Throughput::Bytes(txt.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let reader = Cursor::new(black_box(txt.clone().into_bytes()));
                let count = parser.stream_reader(reader).filter(Result::is_ok).count();
                black_box(count)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Statistics Benchmarks
// =============================================================================

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");
    let parser = TranscriptParser::new(DateOrder::MonthFirst);
    let records = parser.parse_str(&generate_transcript(10_000));
    let overall = AuthorFilter::Overall;
    let stop_words = StopWords::from_text("a the with and number");

    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("monthly_timeline", |b| {
        b.iter(|| black_box(monthly_timeline(black_box(&records), &overall)));
    });
    group.bench_function("busy_users", |b| {
        b.iter(|| black_box(busy_users(black_box(&records), &overall)));
    });
    group.bench_function("most_common_words", |b| {
        b.iter(|| black_box(most_common_words(black_box(&records), &overall, &stop_words)));
    });
    group.bench_function("emoji_frequency", |b| {
        b.iter(|| black_box(emoji_frequency(black_box(&records), &overall)));
    });
    group.bench_function("full_report", |b| {
        b.iter(|| black_box(AnalysisReport::build(black_box(&records), &overall, &stop_words)));
    });

    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let parser = TranscriptParser::new(DateOrder::MonthFirst);
    let config = OutputConfig::new().with_timestamps();

    for size in [1_000_usize, 10_000] {
        let records = parser.parse_str(&generate_transcript(size));
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::new("csv", size), &records, |b, records| {
            b.iter(|| black_box(to_csv(black_box(records), &config).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("jsonl", size), &records, |b, records| {
            b.iter(|| black_box(to_jsonl(black_box(records), &config).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_str,
    bench_streaming,
    bench_statistics,
    bench_output
);
criterion_main!(benches);
