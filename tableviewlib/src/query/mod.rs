//! Query processing: filter, sort and paginate records.
//!
//! This module handles the core of the pipeline - turning the full record
//! list plus the current view state into the rows to display. It provides:
//!
//! - **Options**: The state values (`Sort`, `Filter`, `Pagination`)
//! - **Compare / Filter**: The per-field ordering and matching rules
//! - **View**: `derive_view`, composing filter -> sort -> paginate
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use tableviewlib::query::{derive_view, Filter, Pagination, Sort};
//!
//! let records = vec![
//!     json!({"name": "Alice", "age": 25}),
//!     json!({"name": "Bob", "age": 30}),
//!     json!({"name": "Charlie", "age": 35}),
//! ];
//!
//! let filter = Filter::new("name", "li");
//! let view = derive_view(
//!     &records,
//!     Pagination::default(),
//!     &Sort::descending("age"),
//!     Some(&filter),
//! );
//!
//! assert_eq!(view.total_items, 2);
//! assert_eq!(view.rows[0]["name"], "Charlie");
//! assert!(view.is_last_page);
//! ```

pub mod compare;
pub mod filter;
pub mod options;
pub mod view;

pub use compare::{compare_text, compare_values, stable_sort_by};
pub use filter::{matches_filter, FilterMatcher};
pub use options::{
    parse_page_size, Filter, Pagination, Sort, SortDirection, DEFAULT_PAGE_SIZE, PAGE_SIZES,
};
pub use view::{derive_unpaginated, derive_view, select_rows, DerivedView, PageStatus};
