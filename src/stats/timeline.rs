//! Time-bucketed views.
//!
//! Records with an unparseable timestamp are left out of every view in this
//! module. They still count everywhere else.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::message::{MessageRecord, month_name, weekday_name};

use super::tally::Tally;
use super::{AggregateView, AuthorFilter, Dimension};

/// Monday through Sunday.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Messages per calendar month, oldest first, labelled `MonthName-Year`.
///
/// Months between the first and last active month that have no messages
/// are included with a count of 0.
///
/// ```
/// use chatstats::config::DateOrder;
/// use chatstats::parser::TranscriptParser;
/// use chatstats::stats::{AuthorFilter, monthly_timeline};
///
/// let records = TranscriptParser::new(DateOrder::MonthFirst).parse_str(
///     "1/5/23, 9:00 AM - Alice: happy new year\n\
///      12/31/22, 11:59 PM - Bob: almost there",
/// );
/// let view = monthly_timeline(&records, &AuthorFilter::Overall);
/// assert_eq!(view.keys().collect::<Vec<_>>(), ["December-2022", "January-2023"]);
/// ```
pub fn monthly_timeline(records: &[MessageRecord], filter: &AuthorFilter) -> AggregateView {
    let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in filter.apply(records) {
        if let (Some(year), Some(month)) = (record.year(), record.month()) {
            *buckets.entry((year, month)).or_default() += 1;
        }
    }

    let mut rows = Vec::with_capacity(buckets.len());
    if let (Some(&first), Some(&last)) = (buckets.keys().next(), buckets.keys().next_back()) {
        let mut current = first;
        while current <= last {
            let count = buckets.get(&current).copied().unwrap_or(0);
            rows.push((format!("{}-{}", month_name(current.1), current.0), count));
            current = next_month(current);
        }
    }

    AggregateView::new("monthly_timeline", Dimension::Month, rows)
}

fn next_month((year, month): (i32, u32)) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Messages per calendar date, oldest first, keyed `YYYY-MM-DD`.
///
/// Only dates with at least one message appear.
pub fn daily_timeline(records: &[MessageRecord], filter: &AuthorFilter) -> AggregateView {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in filter.apply(records).filter_map(MessageRecord::date) {
        *buckets.entry(date).or_default() += 1;
    }

    AggregateView::new(
        "daily_timeline",
        Dimension::Date,
        buckets
            .into_iter()
            .map(|(date, count)| (date.format("%Y-%m-%d").to_string(), count)),
    )
}

/// Messages per weekday name, busiest first.
pub fn busy_days(records: &[MessageRecord], filter: &AuthorFilter) -> AggregateView {
    let tally: Tally<&'static str> = filter
        .apply(records)
        .filter_map(MessageRecord::day_name)
        .collect();
    AggregateView::new("busy_days", Dimension::Weekday, owned(tally))
}

/// Messages per month name (all years together), busiest first.
pub fn busy_months(records: &[MessageRecord], filter: &AuthorFilter) -> AggregateView {
    let tally: Tally<&'static str> = filter
        .apply(records)
        .filter_map(MessageRecord::month_name)
        .collect();
    AggregateView::new("busy_months", Dimension::MonthName, owned(tally))
}

fn owned(tally: Tally<&'static str>) -> impl Iterator<Item = (String, usize)> {
    tally
        .into_sorted_desc()
        .into_iter()
        .map(|(key, count)| (key.to_string(), count))
}

/// One author's messages per weekday, indexed Monday = 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub author: String,
    pub counts: [usize; 7],
}

impl ActivityRow {
    pub fn get(&self, weekday: Weekday) -> usize {
        self.counts[weekday.num_days_from_monday() as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Author x weekday message counts.
///
/// Rows are sorted by author name; columns run Monday through Sunday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityMap {
    rows: Vec<ActivityRow>,
}

impl ActivityMap {
    pub fn rows(&self) -> &[ActivityRow] {
        &self.rows
    }

    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.author.as_str())
    }

    pub fn row(&self, author: &str) -> Option<&ActivityRow> {
        self.rows.iter().find(|r| r.author == author)
    }

    /// Count for one cell, 0 if the author is absent.
    pub fn get(&self, author: &str, weekday: Weekday) -> usize {
        self.row(author).map_or(0, |r| r.get(weekday))
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(ActivityRow::total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column labels, Monday through Sunday.
    pub fn weekday_names() -> [&'static str; 7] {
        WEEKDAYS.map(weekday_name)
    }
}

/// Cross-tabulates authors against weekdays.
///
/// Unfiltered, every author with a dated message gets a row
/// (`group_notification` included). Filtered, only that author's row.
pub fn weekday_activity_map(records: &[MessageRecord], filter: &AuthorFilter) -> ActivityMap {
    let mut by_author: BTreeMap<&str, [usize; 7]> = BTreeMap::new();
    for record in filter.apply(records) {
        if let Some(weekday) = record.weekday() {
            let counts = by_author.entry(record.author()).or_default();
            counts[weekday.num_days_from_monday() as usize] += 1;
        }
    }

    ActivityMap {
        rows: by_author
            .into_iter()
            .map(|(author, counts)| ActivityRow {
                author: author.to_string(),
                counts,
            })
            .collect(),
    }
}
