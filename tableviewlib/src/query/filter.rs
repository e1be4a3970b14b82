//! Substring matching for the filter stage.

use crate::data::record::Record;

use super::options::Filter;

/// Whether `record` passes `filter`.
///
/// No filter, or an inactive one (empty key or value), lets everything
/// through. Otherwise the field's display form is lowercased and must contain
/// the lowercased query. Absent fields display as `undefined` and null fields
/// as `null`, and are matched like any other text.
pub fn matches_filter<R: Record + ?Sized>(record: &R, filter: Option<&Filter>) -> bool {
    match filter {
        Some(filter) if filter.is_active() => {
            FilterMatcher::new(filter).matches(record)
        }
        _ => true,
    }
}

/// An active filter with its query already lowercased, for matching many
/// records against the same filter.
#[derive(Debug, Clone)]
pub struct FilterMatcher<'f> {
    key: &'f str,
    needle: String,
}

impl<'f> FilterMatcher<'f> {
    pub fn new(filter: &'f Filter) -> Self {
        Self {
            key: &filter.key,
            needle: filter.value.to_lowercase(),
        }
    }

    /// Build a matcher only for a filter that restricts something.
    pub fn active(filter: Option<&'f Filter>) -> Option<Self> {
        filter.filter(|f| f.is_active()).map(Self::new)
    }

    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        record
            .field(self.key)
            .to_string()
            .to_lowercase()
            .contains(&self.needle)
    }
}
