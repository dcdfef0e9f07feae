//! Emoji usage.

use std::ops::RangeInclusive;

use crate::message::MessageRecord;

use super::tally::Tally;
use super::{AggregateView, AuthorFilter, Dimension};

/// Codepoint blocks counted as emoji.
pub const EMOJI_RANGES: [RangeInclusive<u32>; 8] = [
    0x1F600..=0x1F64F, // emoticons
    0x1F300..=0x1F5FF, // symbols & pictographs
    0x1F680..=0x1F6FF, // transport & map
    0x1F1E0..=0x1F1FF, // regional indicators (flags)
    0x2700..=0x27BF,   // dingbats
    0x1F900..=0x1F9FF, // supplemental symbols & pictographs
    0x1FA70..=0x1FAFF, // symbols & pictographs extended-A
    0x2600..=0x26FF,   // miscellaneous symbols
];

/// Returns `true` if `c` lies in one of [`EMOJI_RANGES`].
pub fn is_emoji(c: char) -> bool {
    let cp = u32::from(c);
    EMOJI_RANGES.iter().any(|range| range.contains(&cp))
}

/// Every emoji codepoint with its number of occurrences, most used first.
///
/// Each codepoint counts on its own, so a flag (two regional indicators)
/// adds two entries.
///
/// ```
/// use chatstats::MessageRecord;
/// use chatstats::stats::{AuthorFilter, emoji_frequency};
///
/// let records = vec![MessageRecord::new(None, "Alice", "Great 🎉🎉 job")];
/// let view = emoji_frequency(&records, &AuthorFilter::Overall);
/// assert_eq!(view.get("🎉"), Some(2));
/// assert_eq!(view.len(), 1);
/// ```
pub fn emoji_frequency(records: &[MessageRecord], filter: &AuthorFilter) -> AggregateView {
    let tally: Tally<char> = filter
        .apply(records)
        .flat_map(|r| r.body().chars())
        .filter(|&c| is_emoji(c))
        .collect();

    AggregateView::new(
        "emoji",
        Dimension::Emoji,
        tally
            .into_sorted_desc()
            .into_iter()
            .map(|(c, count)| (c.to_string(), count)),
    )
}
