//! Error types for tableviewlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the edges of the library.
///
/// The view pipeline itself is total and never fails; these errors come from
/// loading records and from parsing option strings.
#[derive(Error, Debug)]
pub enum TableViewError {
    /// Failed to read a records file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Records input is not valid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Records input is valid JSON but not an array
    #[error("expected a JSON array of records")]
    NotAnArray,

    /// An element of the records array is not an object
    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },

    /// Page size outside the allowed set
    #[error("invalid page size '{0}' (expected one of 5, 10, 25, 50, 100)")]
    InvalidPageSize(String),

    /// Unknown sort direction name
    #[error("unknown sort direction: {0}")]
    InvalidSortDirection(String),

    /// Filter expression not in `key=value` form
    #[error("invalid filter '{0}': expected KEY=VALUE")]
    MalformedFilter(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
