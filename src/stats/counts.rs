//! Headline counts: messages, words, media, links.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::message::MessageRecord;

use super::AuthorFilter;

/// Permissive URL scan: scheme URLs, `www.` hosts, and bare domains with
/// common top-level domains.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?xi)
        (?:\b(?:https?|ftp)://|\bwww\.)[^\s<>"]+
        |
        \b[a-z0-9](?:[a-z0-9-]*[a-z0-9])?
        (?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)*
        \.(?:com|org|net|edu|gov|io|co|me|app|dev|ly|gl|in|uk|de|fr|es|it|nl|ru|br|info|biz|tv|xyz)
        \b(?:/[^\s<>"]*)?
        "#,
    )
    .unwrap()
});

/// Scalar summary of a filtered record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicStats {
    /// Number of records.
    pub messages: usize,
    /// Whitespace-separated words across all bodies, placeholders included.
    pub words: usize,
    /// Records whose body is the media placeholder.
    pub media: usize,
    /// URL-shaped substrings across all bodies.
    pub links: usize,
}

/// Counts messages, words, media placeholders and links.
///
/// ```
/// use chatstats::MessageRecord;
/// use chatstats::stats::{AuthorFilter, fetch_stats};
///
/// let records = vec![
///     MessageRecord::new(None, "Alice", "see https://example.com now"),
///     MessageRecord::new(None, "Bob", "<Media omitted>"),
/// ];
/// let stats = fetch_stats(&records, &AuthorFilter::Overall);
/// assert_eq!(stats.messages, 2);
/// assert_eq!(stats.words, 5);
/// assert_eq!(stats.media, 1);
/// assert_eq!(stats.links, 1);
/// ```
pub fn fetch_stats(records: &[MessageRecord], filter: &AuthorFilter) -> BasicStats {
    filter
        .apply(records)
        .fold(BasicStats::default(), |mut acc, record| {
            acc.messages += 1;
            acc.words += record.words().count();
            if record.is_media() {
                acc.media += 1;
            }
            acc.links += count_links(record.body());
            acc
        })
}

/// Number of URL-shaped substrings in `text`.
pub fn count_links(text: &str) -> usize {
    LINK_RE.find_iter(text).count()
}
