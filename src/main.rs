//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::process;
use std::time::{Duration, Instant};

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatstats::MessageRecord;
use chatstats::cli::Args;
use chatstats::format::write_to_format;
use chatstats::parser::TranscriptParser;
use chatstats::stats::{AggregateView, AnalysisReport, StopWords, filter_options};

/// How many rows of each ranking the text report shows.
const SHOWN_ROWS: usize = 10;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so that `--json` output stays clean.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> chatstats::Result<()> {
    let total_start = Instant::now();
    let parser = TranscriptParser::with_config(args.parser_config())?;

    let parse_start = Instant::now();
    let records = if args.streaming {
        parser
            .stream(&args.input)?
            .collect::<chatstats::Result<Vec<_>>>()?
    } else {
        parser.parse_file(&args.input)?
    };
    let parse_time = parse_start.elapsed();

    if args.list_users {
        for option in filter_options(&records) {
            println!("{}", option);
        }
        return Ok(());
    }

    let stop_words = args
        .stop_words
        .as_deref()
        .map(StopWords::load_or_empty)
        .unwrap_or_default();
    let report = AnalysisReport::build(&records, &args.author_filter(), &stop_words);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print_report(args, &records, &report, parse_time);
    }

    if let Some(ref export) = args.export {
        let format = args.export_format();
        write_to_format(&records, export, format, &args.output_config())?;
        if !args.json {
            println!();
            println!(
                "💾 Exported {} records as {} to {}",
                records.len(),
                format,
                export.display()
            );
        }
    }

    if !args.json {
        println!();
        println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());
    }

    Ok(())
}

fn print_report(
    args: &Args,
    records: &[MessageRecord],
    report: &AnalysisReport,
    parse_time: Duration,
) {
    println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("📅 Dates:   {}", chatstats::config::DateOrder::from(args.date_order));
    println!("👤 User:    {}", report.filter);
    if args.streaming {
        println!("🌊 Mode:    Streaming");
    }
    println!(
        "   Parsed {} records ({:.2}s)",
        records.len(),
        parse_time.as_secs_f64()
    );

    println!();
    println!("📈 Top statistics:");
    println!("   Messages:      {}", report.stats.messages);
    println!("   Words:         {}", report.stats.words);
    println!("   Media shared:  {}", report.stats.media);
    println!("   Links shared:  {}", report.stats.links);

    print_view("🗓️  Monthly timeline:", &report.monthly_timeline, usize::MAX);
    print_view("📆 Busiest days:", &report.busy_days, SHOWN_ROWS);
    print_view("📅 Busiest months:", &report.busy_months, SHOWN_ROWS);

    if report.filter.is_overall() && !report.busy_users.shares.is_empty() {
        println!();
        println!("🏆 Busiest users:");
        for share in report.busy_users.shares.iter().take(SHOWN_ROWS) {
            println!(
                "   {:<24} {:>6}  {:>6.2}%",
                share.author, share.count, share.percent
            );
        }
    }

    print_view("💬 Most common words:", &report.most_common_words, SHOWN_ROWS);
    print_view("😀 Emoji:", &report.emoji, SHOWN_ROWS);
}

fn print_view(title: &str, view: &AggregateView, limit: usize) {
    if view.is_empty() {
        return;
    }
    println!();
    println!("{}", title);
    for (key, count) in view.iter().take(limit) {
        println!("   {:<24} {:>6}", key, count);
    }
}
