//! View state holders.
//!
//! Each holder owns one piece of view state, exposes the transitions allowed
//! on it, and notifies an optional listener after every transition. Nothing
//! is notified on construction.

pub mod filter;
pub mod pagination;
pub mod sort;

pub use filter::{FilterListener, FilterState};
pub use pagination::{PageListener, PaginationState};
pub use sort::{SortListener, SortState};
