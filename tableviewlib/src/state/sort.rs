//! Sort state: which column is sorted, cycling direction on activation.

use std::fmt;

use crate::query::options::{Sort, SortDirection};

/// Receives the new sort right after each toggle.
pub type SortListener = Box<dyn FnMut(&Sort)>;

/// Holds the single active sort criterion.
pub struct SortState {
    current: Sort,
    listener: Option<SortListener>,
}

impl SortState {
    /// Start unsorted, keyed on the identity field.
    pub fn new(identity_key: impl Into<String>) -> Self {
        Self {
            current: Sort::unsorted(identity_key),
            listener: None,
        }
    }

    pub fn on_change(&mut self, listener: impl FnMut(&Sort) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn current(&self) -> &Sort {
        &self.current
    }

    /// Activate a column header.
    ///
    /// The same column advances none -> asc -> desc -> none. Any other column
    /// starts at ascending, whatever the previous column's direction was.
    pub fn toggle(&mut self, key: &str) -> &Sort {
        let direction = if self.current.key == key {
            self.current.direction.next()
        } else {
            SortDirection::Ascending
        };
        self.current = Sort::new(key, direction);
        log::debug!("sort -> {} {}", self.current.key, self.current.direction);

        if let Some(listener) = self.listener.as_mut() {
            listener(&self.current);
        }
        &self.current
    }
}

impl fmt::Debug for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortState")
            .field("current", &self.current)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
