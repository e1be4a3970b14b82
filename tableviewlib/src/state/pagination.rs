//! Pagination state: current page and page size.

use std::fmt;

use crate::query::options::Pagination;

/// Receives a new page index or page size right after it changes.
pub type PageListener = Box<dyn FnMut(usize)>;

#[derive(Default)]
pub struct PaginationState {
    current: Pagination,
    page_listener: Option<PageListener>,
    page_size_listener: Option<PageListener>,
}

impl PaginationState {
    /// Page 0 at the smallest allowed page size.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_page_change(&mut self, listener: impl FnMut(usize) + 'static) {
        self.page_listener = Some(Box::new(listener));
    }

    pub fn on_page_size_change(&mut self, listener: impl FnMut(usize) + 'static) {
        self.page_size_listener = Some(Box::new(listener));
    }

    pub fn current(&self) -> Pagination {
        self.current
    }

    pub fn page(&self) -> usize {
        self.current.page
    }

    pub fn page_size(&self) -> usize {
        self.current.page_size
    }

    /// Jump to `page`. Not clamped: a page past the end derives an empty view.
    pub fn change_page(&mut self, page: usize) {
        self.current.page = page;
        log::debug!("page -> {}", page);

        if let Some(listener) = self.page_listener.as_mut() {
            listener(page);
        }
    }

    /// Switch page size and go back to page 0.
    ///
    /// Returns `false`, without notifying anyone, when `page_size` is zero or
    /// already the current size.
    pub fn change_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 {
            log::trace!("page size must be positive, ignoring 0");
            return false;
        }
        if page_size == self.current.page_size {
            log::trace!("page size already {}, ignoring", page_size);
            return false;
        }

        self.current.page_size = page_size;
        log::debug!("page size -> {}", page_size);
        self.change_page(0);

        if let Some(listener) = self.page_size_listener.as_mut() {
            listener(page_size);
        }
        true
    }
}

impl fmt::Debug for PaginationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationState")
            .field("current", &self.current)
            .field("page_listener", &self.page_listener.is_some())
            .field("page_size_listener", &self.page_size_listener.is_some())
            .finish()
    }
}
