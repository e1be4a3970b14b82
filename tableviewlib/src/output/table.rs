//! Display-ready table data.
//!
//! `RenderedTable` is a presentation-ready structure that a renderer can
//! print directly or serialize to JSON. It holds only strings and flags;
//! filtering, sorting and pagination have already happened in the query
//! stage.

use serde::{Deserialize, Serialize};

use crate::data::record::Record;
use crate::query::view::PageStatus;
use crate::table::TableView;

/// Shown in place of rows when the current page has none.
pub const EMPTY_STATE_MESSAGE: &str = "No data to display.";

/// One rendered data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Identity field value, for keyed rendering
    pub key: String,
    /// Rendered cells, one per column
    pub cells: Vec<String>,
}

/// Table-ready view data.
///
/// Renderers iterate over headers and rows and apply styling - no computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Text for the filter control, present when filtering is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_label: Option<String>,
    /// Column headers, with a sort arrow on the active sort column
    pub headers: Vec<String>,
    /// Current page's rows
    pub rows: Vec<TableRow>,
    /// Set instead of rows when there is nothing to show
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    /// Footer status, present when pagination is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PageStatus>,
}

impl RenderedTable {
    /// Derive the current view of `table` and render it to strings.
    pub fn from_view<R: Record>(table: &TableView<'_, R>) -> Self {
        let view = table.view();
        let columns = table.columns();
        let identity_key = &table.options().identity_key;

        let headers = columns.iter().map(|c| table.header_label(c)).collect();
        let rows: Vec<TableRow> = view
            .rows
            .iter()
            .map(|record| TableRow {
                key: record.field(identity_key).to_string(),
                cells: columns.iter().map(|c| c.cell(*record)).collect(),
            })
            .collect();
        let empty_message = rows
            .is_empty()
            .then(|| EMPTY_STATE_MESSAGE.to_string());

        RenderedTable {
            title: table.title().map(str::to_string),
            filter_label: table
                .options()
                .enable_filter
                .then(|| table.filter_label()),
            headers,
            rows,
            empty_message,
            status: table.page_status(&view),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
