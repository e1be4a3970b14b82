//! The table controller: view state bound to a caller-owned record list.
//!
//! `TableView` is what a rendering layer holds on to. It owns the sort,
//! filter and pagination state, keeps the column list in step with the
//! records and identity settings, and derives the visible rows on demand.
//! The records themselves are only borrowed.
//!
//! ```rust
//! use serde_json::json;
//! use tableviewlib::{TableOptions, TableView};
//!
//! let records = vec![
//!     json!({"id": 1, "name": "Milk", "price": 1.99}),
//!     json!({"id": 2, "name": "Bread", "price": 2.5}),
//! ];
//!
//! let mut table = TableView::new(&records, TableOptions::interactive().hide_identity(true));
//! table.toggle_sort("price");
//! table.toggle_sort("price");
//!
//! let view = table.view();
//! assert_eq!(view.rows[0]["name"], "Bread");
//! assert_eq!(table.columns().len(), 2);
//! ```

use crate::columns::{infer_columns, Column};
use crate::data::record::Record;
use crate::options::TableOptions;
use crate::query::options::{Filter, Pagination, Sort};
use crate::query::view::{derive_unpaginated, derive_view, DerivedView, PageStatus};
use crate::state::{FilterState, PaginationState, SortState};

#[derive(Debug)]
pub struct TableView<'a, R> {
    records: &'a [R],
    options: TableOptions,
    columns: Vec<Column>,
    supplied_columns: bool,
    sort: SortState,
    filter: FilterState,
    pagination: PaginationState,
}

impl<'a, R: Record> TableView<'a, R> {
    /// Bind fresh default state to `records`. No listener fires here.
    pub fn new(records: &'a [R], options: TableOptions) -> Self {
        let columns = infer_columns(records, &options.identity_key, options.hide_identity);
        Self {
            records,
            sort: SortState::new(options.identity_key.clone()),
            filter: FilterState::new(),
            pagination: PaginationState::new(),
            options,
            columns,
            supplied_columns: false,
        }
    }

    /// Use these columns instead of inferring them from the records.
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self.supplied_columns = true;
        self
    }

    pub fn records(&self) -> &'a [R] {
        self.records
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn title(&self) -> Option<&str> {
        self.options.title.as_deref()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn sort(&self) -> &Sort {
        self.sort.current()
    }

    pub fn filter(&self) -> Option<&Filter> {
        self.filter.active()
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination.current()
    }

    /// Replace the record list. Columns are re-inferred; view state is kept.
    pub fn set_records(&mut self, records: &'a [R]) {
        self.records = records;
        self.refresh_columns();
    }

    pub fn set_hide_identity(&mut self, hide: bool) {
        if self.options.hide_identity != hide {
            self.options.hide_identity = hide;
            self.refresh_columns();
        }
    }

    /// Change the identity field. The current sort is left alone.
    pub fn set_identity_key(&mut self, key: impl Into<String>) {
        let key = key.into();
        if self.options.identity_key != key {
            self.options.identity_key = key;
            self.refresh_columns();
        }
    }

    fn refresh_columns(&mut self) {
        if self.supplied_columns {
            return;
        }
        self.columns = infer_columns(
            self.records,
            &self.options.identity_key,
            self.options.hide_identity,
        );
        log::debug!("inferred {} columns", self.columns.len());
    }

    pub fn on_sort_change(&mut self, listener: impl FnMut(&Sort) + 'static) {
        self.sort.on_change(listener);
    }

    pub fn on_filter_change(&mut self, listener: impl FnMut(Option<&Filter>) + 'static) {
        self.filter.on_change(listener);
    }

    pub fn on_page_change(&mut self, listener: impl FnMut(usize) + 'static) {
        self.pagination.on_page_change(listener);
    }

    pub fn on_page_size_change(&mut self, listener: impl FnMut(usize) + 'static) {
        self.pagination.on_page_size_change(listener);
    }

    /// Activate a column header. Ignored (returns `false`) with sorting off.
    pub fn toggle_sort(&mut self, key: &str) -> bool {
        if !self.options.enable_sort {
            log::trace!("sorting disabled, ignoring toggle on {}", key);
            return false;
        }
        self.sort.toggle(key);
        true
    }

    /// Apply or clear the filter and go back to page 0.
    ///
    /// The filter listener fires first, then the page listener. Ignored
    /// (returns `false`) with filtering off.
    pub fn apply_filter(&mut self, filter: Option<Filter>) -> bool {
        if !self.options.enable_filter {
            log::trace!("filtering disabled, ignoring filter change");
            return false;
        }
        self.filter.apply(filter);
        self.pagination.change_page(0);
        true
    }

    pub fn clear_filter(&mut self) -> bool {
        self.apply_filter(None)
    }

    /// Ignored (returns `false`) with pagination off.
    pub fn change_page(&mut self, page: usize) -> bool {
        if !self.options.enable_pagination {
            log::trace!("pagination disabled, ignoring page {}", page);
            return false;
        }
        self.pagination.change_page(page);
        true
    }

    /// Returns `false` with pagination off, or when `page_size` is zero or
    /// already current.
    pub fn change_page_size(&mut self, page_size: usize) -> bool {
        if !self.options.enable_pagination {
            log::trace!("pagination disabled, ignoring page size {}", page_size);
            return false;
        }
        self.pagination.change_page_size(page_size)
    }

    pub fn next_page(&mut self) -> bool {
        let page = self.pagination.page().saturating_add(1);
        self.change_page(page)
    }

    /// No-op on page 0.
    pub fn previous_page(&mut self) -> bool {
        match self.pagination.page().checked_sub(1) {
            Some(page) => self.change_page(page),
            None => false,
        }
    }

    /// Derive the rows to display from the current state.
    ///
    /// With pagination off, every filtered and sorted row is returned and the
    /// view counts as the last page.
    pub fn view(&self) -> DerivedView<'a, R> {
        if self.options.enable_pagination {
            derive_view(
                self.records,
                self.pagination.current(),
                self.sort.current(),
                self.filter.active(),
            )
        } else {
            derive_unpaginated(self.records, self.sort.current(), self.filter.active())
        }
    }

    /// Footer status for `view`, or `None` with pagination off.
    pub fn page_status(&self, view: &DerivedView<'_, R>) -> Option<PageStatus> {
        self.options.enable_pagination.then(|| {
            PageStatus::new(self.pagination.current(), view.total_items, view.is_last_page)
        })
    }

    /// Text for the filter control: "Filter by <column label>" while a filter
    /// key is set, "Filter" otherwise.
    pub fn filter_label(&self) -> String {
        match self.filter.active() {
            Some(filter) if !filter.key.is_empty() => {
                let label = self
                    .columns
                    .iter()
                    .find(|c| c.key == filter.key)
                    .map_or(filter.key.as_str(), |c| c.label.as_str());
                format!("Filter by {}", label)
            }
            _ => "Filter".to_string(),
        }
    }

    /// Header text for `column`, prefixed with the sort arrow when it is the
    /// active sort column.
    pub fn header_label(&self, column: &Column) -> String {
        let sort = self.sort.current();
        let indicator = sort.direction.indicator();
        if self.options.enable_sort && sort.key == column.key && !indicator.is_empty() {
            format!("{} {}", indicator, column.label)
        } else {
            column.label.clone()
        }
    }
}
