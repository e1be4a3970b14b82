//! View state types: sort, filter and pagination cursor.
//!
//! These are plain values. The state holders in [`crate::state`] own and
//! mutate them; the pipeline in [`crate::query::view`] only reads them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TableViewError;

/// Page sizes offered to the user. The first entry is the default.
pub const PAGE_SIZES: [usize; 5] = [5, 10, 25, 50, 100];

/// Page size used until the user picks another one.
pub const DEFAULT_PAGE_SIZE: usize = PAGE_SIZES[0];

/// Check a page size against [`PAGE_SIZES`].
pub fn parse_page_size(s: &str) -> Result<usize, TableViewError> {
    s.trim()
        .parse::<usize>()
        .ok()
        .filter(|size| PAGE_SIZES.contains(size))
        .ok_or_else(|| TableViewError::InvalidPageSize(s.to_string()))
}

/// Sort direction of the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Source order, no sorting
    #[default]
    #[serde(rename = "none")]
    None,
    /// Ascending (A-Z, smallest first)
    #[serde(rename = "asc")]
    Ascending,
    /// Descending (Z-A, largest first)
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Next state when the same column header is activated again:
    /// none -> asc -> desc -> none.
    pub fn next(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }

    pub fn is_none(self) -> bool {
        self == SortDirection::None
    }

    /// Arrow shown next to the active sort column's header.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
            SortDirection::None => "",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::None => "none",
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = TableViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "off" => Ok(SortDirection::None),
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(TableViewError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// The single active sort criterion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sort {
    /// Field being sorted on
    pub key: String,
    /// Direction; `None` leaves source order untouched
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    /// Initial state: keyed on the identity field, not sorted.
    pub fn unsorted(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::None)
    }

    pub fn ascending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Descending)
    }
}

/// A single-field substring filter.
///
/// The absence of a filter is expressed as `Option<Filter>::None`. A filter
/// with an empty key or empty value is also inactive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filter {
    /// Field to match against
    pub key: String,
    /// Case-insensitive substring to look for
    pub value: String,
}

impl Filter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Whether this filter restricts anything.
    pub fn is_active(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }
}

/// Parses `KEY=VALUE`. Only the first `=` splits; the value may contain more.
impl FromStr for Filter {
    type Err = TableViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| TableViewError::MalformedFilter(s.to_string()))?;
        if key.is_empty() {
            return Err(TableViewError::MalformedFilter(s.to_string()));
        }
        Ok(Filter::new(key, value))
    }
}

/// Pagination cursor. `page` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Index of the first row on this page. Saturates instead of overflowing
    /// for absurd page numbers, which then simply land past the end.
    pub fn start(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }
}
