//! Named keyed count tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the keys of an [`AggregateView`] are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Year and month bucket, e.g. `December-2022`.
    Month,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
    /// Weekday name, e.g. `Monday`.
    Weekday,
    /// Month name regardless of year, e.g. `March`.
    MonthName,
    Author,
    Word,
    Emoji,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Month => "month",
            Dimension::Date => "date",
            Dimension::Weekday => "weekday",
            Dimension::MonthName => "month_name",
            Dimension::Author => "author",
            Dimension::Word => "word",
            Dimension::Emoji => "emoji",
        };
        f.write_str(name)
    }
}

/// One `(key, count)` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRow {
    pub key: String,
    pub count: usize,
}

/// A named table of counts keyed by one [`Dimension`].
///
/// Views are produced fresh by each statistics query. Row order is part of
/// the result: chronological for timelines, descending count for rankings.
///
/// ```
/// use chatstats::stats::{AggregateView, Dimension};
///
/// let view = AggregateView::new(
///     "busy_days",
///     Dimension::Weekday,
///     vec![("Monday".to_string(), 3), ("Friday".to_string(), 1)],
/// );
/// assert_eq!(view.get("Monday"), Some(3));
/// assert_eq!(view.total(), 4);
/// assert_eq!(view.keys().collect::<Vec<_>>(), ["Monday", "Friday"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateView {
    name: String,
    dimension: Dimension,
    rows: Vec<ViewRow>,
}

impl AggregateView {
    pub fn new(
        name: impl Into<String>,
        dimension: Dimension,
        rows: impl IntoIterator<Item = (String, usize)>,
    ) -> Self {
        Self {
            name: name.into(),
            dimension,
            rows: rows
                .into_iter()
                .map(|(key, count)| ViewRow { key, count })
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn rows(&self) -> &[ViewRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Count for `key`, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.rows.iter().find(|r| r.key == key).map(|r| r.count)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.rows.iter().map(|r| r.count).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.key.as_str())
    }

    /// Iterates over `(key, count)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.rows.iter().map(|r| (r.key.as_str(), r.count))
    }
}

impl<'a> IntoIterator for &'a AggregateView {
    type Item = &'a ViewRow;
    type IntoIter = std::slice::Iter<'a, ViewRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
