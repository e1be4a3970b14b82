//! # tableviewlib
//!
//! Client-side sorting, filtering and pagination for tables of in-memory
//! records.
//!
//! ## Overview
//!
//! The library is the data side of a table component. It takes the full
//! record list plus the current view state and derives the rows to show,
//! leaving all drawing to the caller. The pipeline stages are:
//!
//! - **Data**: Records of any shape, read through the [`Record`] trait
//! - **Query**: Filter, then sort, then paginate ([`derive_view`])
//! - **State**: Sort, filter and pagination holders with change listeners
//! - **Output**: Display-ready strings ([`RenderedTable`])
//!
//! [`TableView`] ties the stages together for a rendering layer.
//!
//! ## Behaviour
//!
//! - **Filtering**: One field, case-insensitive substring match
//! - **Sorting**: One field; header activation cycles none -> asc -> desc
//! - **Pagination**: Zero-based pages, page sizes 5, 10, 25, 50 or 100
//! - **Columns**: Inferred from the first record when not supplied
//!
//! The pipeline is total: unknown field types, missing fields and
//! out-of-range pages all have defined results instead of errors.
//!
//! ## Example
//!
//! ```rust
//! use tableviewlib::{parse_records, Filter, RenderedTable, TableOptions, TableView};
//!
//! let records = parse_records(r#"[
//!     {"id": 1, "name": "Milk", "section": "Dairy"},
//!     {"id": 2, "name": "Bread", "section": "Bakery"},
//!     {"id": 3, "name": "Cheese", "section": "Dairy"}
//! ]"#).unwrap();
//!
//! let mut table = TableView::new(&records, TableOptions::interactive().hide_identity(true));
//! table.apply_filter(Some(Filter::new("section", "dairy")));
//! table.toggle_sort("name");
//!
//! let rendered = RenderedTable::from_view(&table);
//! assert_eq!(rendered.headers, vec!["↑ name", "section"]);
//! assert_eq!(rendered.rows[0].cells, vec!["Cheese", "Dairy"]);
//! assert_eq!(rendered.status.unwrap().label(), "1 - 2 of 2");
//! ```

pub mod columns;
pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod query;
pub mod state;
pub mod table;

pub use columns::{infer_columns, Column, Renderer};
pub use data::{load_records, parse_records, read_records, JsonRecord, Record, Value};
pub use error::TableViewError;
pub use options::TableOptions;
pub use output::{RenderedTable, TableRow, EMPTY_STATE_MESSAGE};
pub use query::{
    derive_view, matches_filter, DerivedView, Filter, PageStatus, Pagination, Sort,
    SortDirection, PAGE_SIZES,
};
pub use state::{FilterState, PaginationState, SortState};
pub use table::TableView;

/// Result type for tableviewlib operations
pub type Result<T> = std::result::Result<T, TableViewError>;
