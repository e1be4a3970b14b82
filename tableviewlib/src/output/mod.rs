//! Output formatting: present a table view as strings.
//!
//! This module handles the final stage of the pipeline - formatting the
//! derived view for display. It provides:
//!
//! - **RenderedTable**: headers, rendered rows, empty state and footer status
//! - **TableRow**: one rendered row with its identity key
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use tableviewlib::output::RenderedTable;
//! use tableviewlib::{TableOptions, TableView};
//!
//! let records = vec![json!({"id": 1, "name": "Milk"})];
//! let table = TableView::new(&records, TableOptions::new().hide_identity(true));
//! let rendered = RenderedTable::from_view(&table);
//!
//! assert_eq!(rendered.headers, vec!["name"]);
//! assert_eq!(rendered.rows[0].cells, vec!["Milk"]);
//! ```

pub mod table;

pub use table::{RenderedTable, TableRow, EMPTY_STATE_MESSAGE};
