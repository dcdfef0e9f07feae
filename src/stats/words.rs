//! Word frequency and word-cloud input.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{ChatstatsError, Result};
use crate::message::MessageRecord;

use super::tally::Tally;
use super::{AggregateView, AuthorFilter, Dimension};

/// Rows kept by [`most_common_words`].
pub const TOP_WORDS: usize = 20;

/// Lowercased tokens excluded from word statistics.
///
/// Always passed explicitly; nothing in the library reads a stop-word file
/// on its own.
///
/// ```
/// use chatstats::stats::StopWords;
///
/// let stop = StopWords::from_text("The\na  an\n");
/// assert!(stop.contains("the"));
/// assert!(stop.contains("an"));
/// assert_eq!(stop.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the set from whitespace-separated tokens.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Loads a stop-word file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::Configuration`] if the file is missing or
    /// unreadable.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ChatstatsError::configuration(path, e.to_string()))?;
        let stop_words = Self::from_text(&text);
        tracing::debug!(path = %path.display(), words = stop_words.len(), "loaded stop words");
        Ok(stop_words)
    }

    /// Loads a stop-word file, falling back to the empty set with a warning.
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stop words unavailable, continuing without them");
            Self::empty()
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }
}

/// Lowercased tokens of human text messages, stop words removed.
///
/// Notifications and media placeholders contribute nothing.
pub fn tokens<'a>(
    records: &'a [MessageRecord],
    filter: &'a AuthorFilter,
    stop_words: &'a StopWords,
) -> impl Iterator<Item = String> + 'a {
    filter
        .apply(records)
        .filter(|r| !r.is_group_notification() && !r.is_media())
        .flat_map(|r| r.words())
        .map(str::to_lowercase)
        .filter(move |w| !stop_words.contains(w))
}

fn word_tally(
    records: &[MessageRecord],
    filter: &AuthorFilter,
    stop_words: &StopWords,
) -> Tally<String> {
    tokens(records, filter, stop_words).collect()
}

/// The [`TOP_WORDS`] most frequent tokens, ties in first-seen order.
pub fn most_common_words(
    records: &[MessageRecord],
    filter: &AuthorFilter,
    stop_words: &StopWords,
) -> AggregateView {
    let rows = word_tally(records, filter, stop_words)
        .into_sorted_desc()
        .into_iter()
        .take(TOP_WORDS);
    AggregateView::new("most_common_words", Dimension::Word, rows)
}

/// Every token with its frequency, for an external word-cloud renderer.
pub fn word_cloud_weights(
    records: &[MessageRecord],
    filter: &AuthorFilter,
    stop_words: &StopWords,
) -> AggregateView {
    let rows = word_tally(records, filter, stop_words).into_sorted_desc();
    AggregateView::new("word_cloud", Dimension::Word, rows)
}
