//! Filter state: the single active filter, if any.

use std::fmt;

use crate::query::options::Filter;

/// Receives the new filter (or `None` when cleared) right after each change.
pub type FilterListener = Box<dyn FnMut(Option<&Filter>)>;

#[derive(Default)]
pub struct FilterState {
    active: Option<Filter>,
    listener: Option<FilterListener>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_change(&mut self, listener: impl FnMut(Option<&Filter>) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn active(&self) -> Option<&Filter> {
        self.active.as_ref()
    }

    /// Replace the filter. `None` clears it. Incomplete filters are stored as
    /// given; the matcher treats them as inactive.
    pub fn apply(&mut self, filter: Option<Filter>) {
        match &filter {
            Some(f) => log::debug!("filter -> {} contains {:?}", f.key, f.value),
            None => log::debug!("filter cleared"),
        }
        self.active = filter;

        if let Some(listener) = self.listener.as_mut() {
            listener(self.active.as_ref());
        }
    }

    pub fn clear(&mut self) {
        self.apply(None);
    }
}

impl fmt::Debug for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterState")
            .field("active", &self.active)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
