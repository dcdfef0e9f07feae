//! Statistics over parsed records.
//!
//! Every operation is a pure function of `(records, filter)`: nothing is
//! cached and nothing is mutated, so queries can run in any order or from
//! several threads over the same `&[MessageRecord]`.
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`fetch_stats`] | [`BasicStats`] |
//! | [`monthly_timeline`], [`daily_timeline`] | chronological [`AggregateView`] |
//! | [`busy_days`], [`busy_months`] | ranked [`AggregateView`] |
//! | [`busy_users`] | [`BusyUsers`] |
//! | [`weekday_activity_map`] | [`ActivityMap`] |
//! | [`most_common_words`], [`word_cloud_weights`] | ranked [`AggregateView`] |
//! | [`emoji_frequency`] | ranked [`AggregateView`] |
//! | [`AnalysisReport::build`] | all of the above |
//!
//! # Example
//!
//! ```
//! use chatstats::config::DateOrder;
//! use chatstats::parser::TranscriptParser;
//! use chatstats::stats::{AuthorFilter, busy_users, fetch_stats};
//!
//! let records = TranscriptParser::new(DateOrder::DayFirst).parse_str(
//!     "3/4/23, 10:00 - Ana: hola\n\
//!      3/4/23, 10:01 - Luis: hola Ana\n\
//!      3/4/23, 10:02 - Ana: que tal",
//! );
//!
//! let stats = fetch_stats(&records, &AuthorFilter::Overall);
//! assert_eq!(stats.messages, 3);
//!
//! let users = busy_users(&records, &AuthorFilter::Overall);
//! assert_eq!(users.top.keys().next(), Some("Ana"));
//! ```

mod counts;
mod emoji;
mod filter;
mod report;
mod tally;
mod timeline;
mod users;
mod view;
mod words;

pub use counts::{BasicStats, count_links, fetch_stats};
pub use emoji::{EMOJI_RANGES, emoji_frequency, is_emoji};
pub use filter::{AuthorFilter, OVERALL, filter_options, participants};
pub use report::AnalysisReport;
pub use timeline::{
    ActivityMap, ActivityRow, WEEKDAYS, busy_days, busy_months, daily_timeline, monthly_timeline,
    weekday_activity_map,
};
pub use users::{AuthorShare, BusyUsers, TOP_USERS, busy_users};
pub use view::{AggregateView, Dimension, ViewRow};
pub use words::{StopWords, TOP_WORDS, most_common_words, tokens, word_cloud_weights};
