//! Author filter shared by every statistics operation.
//!
//! The filter is either [`AuthorFilter::Overall`] (all records) or one
//! specific author, matched by exact string equality. Parsing from a string
//! never fails: `"Overall"` is the only reserved name.
//!
//! ```
//! use chatstats::stats::AuthorFilter;
//!
//! let overall: AuthorFilter = "Overall".parse().unwrap();
//! assert!(overall.is_overall());
//!
//! let alice: AuthorFilter = "Alice".parse().unwrap();
//! assert_eq!(alice.author(), Some("Alice"));
//! ```

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::message::MessageRecord;

/// Name that selects every record.
pub const OVERALL: &str = "Overall";

/// Selects which records a statistics query looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum AuthorFilter {
    /// No filtering.
    #[default]
    Overall,
    /// Only records whose author equals this name.
    Author(String),
}

impl AuthorFilter {
    /// Filter for a single author.
    pub fn author_named(name: impl Into<String>) -> Self {
        AuthorFilter::Author(name.into())
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, AuthorFilter::Overall)
    }

    /// The selected author, or `None` for [`AuthorFilter::Overall`].
    pub fn author(&self) -> Option<&str> {
        match self {
            AuthorFilter::Overall => None,
            AuthorFilter::Author(name) => Some(name),
        }
    }

    /// Returns `true` if `record` passes the filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            AuthorFilter::Overall => true,
            AuthorFilter::Author(name) => record.author() == name,
        }
    }

    /// Iterates over the records that pass the filter, in order.
    pub fn apply<'a>(
        &'a self,
        records: &'a [MessageRecord],
    ) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        records.iter().filter(move |r| self.matches(r))
    }
}

impl fmt::Display for AuthorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorFilter::Overall => f.write_str(OVERALL),
            AuthorFilter::Author(name) => f.write_str(name),
        }
    }
}

impl FromStr for AuthorFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for AuthorFilter {
    fn from(s: String) -> Self {
        if s == OVERALL {
            AuthorFilter::Overall
        } else {
            AuthorFilter::Author(s)
        }
    }
}

impl From<AuthorFilter> for String {
    fn from(filter: AuthorFilter) -> Self {
        filter.to_string()
    }
}

/// Distinct human authors, sorted, without `group_notification`.
pub fn participants(records: &[MessageRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|r| !r.is_group_notification())
        .map(|r| r.author())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Choices for an author picker: `"Overall"` followed by [`participants`].
pub fn filter_options(records: &[MessageRecord]) -> Vec<String> {
    std::iter::once(OVERALL.to_string())
        .chain(participants(records))
        .collect()
}
