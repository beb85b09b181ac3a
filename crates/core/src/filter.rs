//! Record filtering vocabulary shared by every list page.
//!
//! A page filter is a conjunction of constraints:
//! - a free-text [`TextQuery`], matched case-insensitively against a fixed set
//!   of fields per record kind (OR across fields, empty query matches all);
//! - zero or more exact-match [`Facet`]s, where the reserved `"all"` value
//!   places no constraint.
//!
//! Filtering never reorders or mutates its input.

use core::str::FromStr;

/// Reserved facet value meaning "no constraint".
pub const ALL: &str = "all";

/// Exact-match constraint on one attribute of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet<T> {
    /// No constraint on this facet.
    All,
    /// Only records whose attribute equals this value.
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: PartialEq> Facet<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }
}

impl<T> From<Option<T>> for Facet<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Facet::All, Facet::Only)
    }
}

impl<T: FromStr> FromStr for Facet<T> {
    type Err = T::Err;

    /// Parse a select-box value; `"all"` maps to [`Facet::All`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(Facet::All)
        } else {
            s.parse().map(Facet::Only)
        }
    }
}

/// Case-insensitive substring query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            needle: raw.as_ref().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// True if any field contains the query (or the query is empty).
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.needle.is_empty() {
            return true;
        }
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

impl From<&str> for TextQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Records that expose a fixed set of free-text searchable fields.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Predicate over records of one kind.
pub trait RecordFilter<R> {
    fn matches(&self, record: &R) -> bool;
}

impl<R: Searchable> RecordFilter<R> for TextQuery {
    fn matches(&self, record: &R) -> bool {
        self.matches_any(record.search_fields())
    }
}

/// The visible subsequence of `records`, in source order.
pub fn filter_records<R, F>(records: &[R], filter: &F) -> Vec<R>
where
    R: Clone,
    F: RecordFilter<R> + ?Sized,
{
    let visible: Vec<R> = records.iter().filter(|r| filter.matches(r)).cloned().collect();
    tracing::debug!(total = records.len(), visible = visible.len(), "records filtered");
    visible
}

/// Number of records satisfying `predicate`.
pub fn count_where<R, P>(records: &[R], predicate: P) -> usize
where
    P: Fn(&R) -> bool,
{
    records.iter().filter(|r| predicate(r)).count()
}
