//! Loading JSON record lists.
//!
//! Input must be a JSON array whose elements are all objects. Field order of
//! each object is preserved, which fixes the inferred column order.

use std::io::Read;
use std::path::Path;

use crate::error::TableViewError;
use crate::Result;

use super::record::JsonRecord;

/// Parse records from a JSON string.
pub fn parse_records(text: &str) -> Result<Vec<JsonRecord>> {
    let document: serde_json::Value = serde_json::from_str(text)?;
    into_records(document)
}

/// Read and parse records from any reader (e.g. stdin).
pub fn read_records(reader: impl Read) -> Result<Vec<JsonRecord>> {
    let document: serde_json::Value = serde_json::from_reader(reader)?;
    into_records(document)
}

/// Read and parse records from a file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<JsonRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| TableViewError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&text)?;
    log::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

fn into_records(document: serde_json::Value) -> Result<Vec<JsonRecord>> {
    let serde_json::Value::Array(items) = document else {
        return Err(TableViewError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            serde_json::Value::Object(map) => Ok(map),
            _ => Err(TableViewError::NotAnObject { index }),
        })
        .collect()
}
