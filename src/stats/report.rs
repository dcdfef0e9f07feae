//! Every statistic for one author filter, bundled.

use serde::{Deserialize, Serialize};

use crate::message::MessageRecord;

use super::{
    ActivityMap, AggregateView, AuthorFilter, BasicStats, BusyUsers, StopWords, busy_days,
    busy_months, busy_users, daily_timeline, emoji_frequency, fetch_stats, monthly_timeline,
    most_common_words, weekday_activity_map, word_cloud_weights,
};

/// Result of running the whole statistics engine once.
///
/// ```
/// use chatstats::config::DateOrder;
/// use chatstats::parser::TranscriptParser;
/// use chatstats::stats::{AnalysisReport, AuthorFilter, StopWords};
///
/// let records = TranscriptParser::new(DateOrder::MonthFirst)
///     .parse_str("1/1/23, 9:00 AM - Alice: Great 🎉🎉 job");
/// let report = AnalysisReport::build(&records, &AuthorFilter::Overall, &StopWords::empty());
///
/// assert_eq!(report.stats.messages, 1);
/// assert_eq!(report.emoji.get("🎉"), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub filter: AuthorFilter,
    pub stats: BasicStats,
    pub monthly_timeline: AggregateView,
    pub daily_timeline: AggregateView,
    pub busy_days: AggregateView,
    pub busy_months: AggregateView,
    pub activity_map: ActivityMap,
    pub busy_users: BusyUsers,
    pub most_common_words: AggregateView,
    pub word_cloud: AggregateView,
    pub emoji: AggregateView,
}

impl AnalysisReport {
    pub fn build(records: &[MessageRecord], filter: &AuthorFilter, stop_words: &StopWords) -> Self {
        let report = Self {
            filter: filter.clone(),
            stats: fetch_stats(records, filter),
            monthly_timeline: monthly_timeline(records, filter),
            daily_timeline: daily_timeline(records, filter),
            busy_days: busy_days(records, filter),
            busy_months: busy_months(records, filter),
            activity_map: weekday_activity_map(records, filter),
            busy_users: busy_users(records, filter),
            most_common_words: most_common_words(records, filter, stop_words),
            word_cloud: word_cloud_weights(records, filter, stop_words),
            emoji: emoji_frequency(records, filter),
        };

        tracing::info!(
            filter = %report.filter,
            messages = report.stats.messages,
            authors = report.busy_users.shares.len(),
            "built analysis report"
        );
        report
    }

    /// Pretty-printed JSON.
    #[cfg(feature = "json-output")]
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
