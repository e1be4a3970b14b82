//! Keyed field access over arbitrary record types.
//!
//! The pipeline is generic over record shape. A type becomes a table row by
//! implementing [`Record`]: look a field up by name, and list field names in
//! declaration order (used only for column inference).
//!
//! ```rust
//! use tableviewlib::{Record, Value};
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Record for Person {
//!     fn field(&self, key: &str) -> Value<'_> {
//!         match key {
//!             "name" => Value::Text(&self.name),
//!             "age" => Value::Number(self.age as f64),
//!             _ => Value::Absent,
//!         }
//!     }
//!
//!     fn keys(&self) -> Vec<&str> {
//!         vec!["name", "age"]
//!     }
//! }
//! ```

use super::value::Value;

/// A row of the table.
pub trait Record {
    /// Read one field. Missing fields yield [`Value::Absent`].
    fn field(&self, key: &str) -> Value<'_>;

    /// Field names in declaration order.
    fn keys(&self) -> Vec<&str>;
}

/// JSON objects are records; key order follows the source document.
pub type JsonRecord = serde_json::Map<String, serde_json::Value>;

impl Record for JsonRecord {
    fn field(&self, key: &str) -> Value<'_> {
        self.get(key).map_or(Value::Absent, Value::from)
    }

    fn keys(&self) -> Vec<&str> {
        serde_json::Map::keys(self).map(String::as_str).collect()
    }
}

/// Any JSON value is a record; non-objects simply have no fields.
impl Record for serde_json::Value {
    fn field(&self, key: &str) -> Value<'_> {
        match self {
            serde_json::Value::Object(map) => map.field(key),
            _ => Value::Absent,
        }
    }

    fn keys(&self) -> Vec<&str> {
        match self {
            serde_json::Value::Object(map) => Record::keys(map),
            _ => Vec::new(),
        }
    }
}

/// Ordered `(key, value)` pairs, handy for tests and ad-hoc rows.
impl Record for Vec<(String, String)> {
    fn field(&self, key: &str) -> Value<'_> {
        self.iter()
            .find(|(k, _)| k == key)
            .map_or(Value::Absent, |(_, v)| Value::Text(v))
    }

    fn keys(&self) -> Vec<&str> {
        self.iter().map(|(k, _)| k.as_str()).collect()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, key: &str) -> Value<'_> {
        (**self).field(key)
    }

    fn keys(&self) -> Vec<&str> {
        (**self).keys()
    }
}
