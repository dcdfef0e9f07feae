//! Per-author activity.

use serde::{Deserialize, Serialize};

use crate::message::MessageRecord;

use super::tally::Tally;
use super::{AggregateView, AuthorFilter, Dimension};

/// How many authors the ranking keeps.
pub const TOP_USERS: usize = 5;

/// One author's share of the filtered messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorShare {
    pub author: String,
    pub count: usize,
    /// Percent of all filtered messages, rounded to 2 decimals.
    pub percent: f64,
}

/// Result of [`busy_users`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyUsers {
    /// The busiest authors, at most [`TOP_USERS`].
    pub top: AggregateView,
    /// Every author with their share, busiest first.
    pub shares: Vec<AuthorShare>,
}

impl BusyUsers {
    /// Sum of all percentages; 100 up to rounding unless empty.
    pub fn percent_total(&self) -> f64 {
        self.shares.iter().map(|s| s.percent).sum()
    }
}

/// Ranks authors by message count.
///
/// `group_notification` is ranked like any other author unless the filter
/// excludes it. Ties keep first-encountered order.
pub fn busy_users(records: &[MessageRecord], filter: &AuthorFilter) -> BusyUsers {
    let tally: Tally<&str> = filter.apply(records).map(MessageRecord::author).collect();
    let ranked = tally.into_sorted_desc();
    let total: usize = ranked.iter().map(|(_, count)| count).sum();

    let shares = ranked
        .iter()
        .map(|&(author, count)| AuthorShare {
            author: author.to_string(),
            count,
            percent: percent(count, total),
        })
        .collect();

    let top = AggregateView::new(
        "busy_users",
        Dimension::Author,
        ranked
            .iter()
            .take(TOP_USERS)
            .map(|&(author, count)| (author.to_string(), count)),
    );

    BusyUsers { top, shares }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 10_000.0).round() / 100.0
}
