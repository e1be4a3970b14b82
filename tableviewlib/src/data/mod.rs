//! Record access: the data the table displays.
//!
//! This module handles the input side of the pipeline - how rows are read.
//! It provides:
//!
//! - **Value**: a borrowed field value with its display form
//! - **Record**: keyed field access over any row type
//! - **Loading**: JSON record lists from files, readers or strings

pub mod loader;
pub mod record;
pub mod value;

pub use loader::{load_records, parse_records, read_records};
pub use record::{JsonRecord, Record};
pub use value::{Value, ABSENT_PLACEHOLDER, NULL_PLACEHOLDER};
