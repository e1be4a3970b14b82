//! Table configuration.
//!
//! All toggles default to off, so a bare table shows every inferred column,
//! with no header sorting, no filter and no pagination controls.

use serde::{Deserialize, Serialize};

/// Options for a [`crate::TableView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Field that uniquely identifies each record
    pub identity_key: String,
    /// Optional heading shown above the table
    pub title: Option<String>,
    /// Leave the identity column out of the inferred columns
    pub hide_identity: bool,
    /// Show one page at a time
    pub enable_pagination: bool,
    /// Let header activation change the sort
    pub enable_sort: bool,
    /// Let the user apply a filter
    pub enable_filter: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            identity_key: "id".to_string(),
            title: None,
            hide_identity: false,
            enable_pagination: false,
            enable_sort: false,
            enable_filter: false,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pagination, sort and filter all on.
    pub fn interactive() -> Self {
        Self::new().pagination(true).sort(true).filter(true)
    }

    /// Builder: set the identity field
    pub fn identity_key(mut self, key: impl Into<String>) -> Self {
        self.identity_key = key.into();
        self
    }

    /// Builder: set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: hide or show the identity column
    pub fn hide_identity(mut self, hide: bool) -> Self {
        self.hide_identity = hide;
        self
    }

    /// Builder: enable pagination
    pub fn pagination(mut self, enabled: bool) -> Self {
        self.enable_pagination = enabled;
        self
    }

    /// Builder: enable sorting
    pub fn sort(mut self, enabled: bool) -> Self {
        self.enable_sort = enabled;
        self
    }

    /// Builder: enable filtering
    pub fn filter(mut self, enabled: bool) -> Self {
        self.enable_filter = enabled;
        self
    }
}
