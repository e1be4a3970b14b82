//! Field values as the pipeline sees them.
//!
//! A [`Value`] borrows from the record it was read from, so comparing and
//! filtering never copies record contents.

use std::fmt;

/// String form of a field the record does not have.
pub const ABSENT_PLACEHOLDER: &str = "undefined";

/// String form of an explicit null.
pub const NULL_PLACEHOLDER: &str = "null";

/// A single field value read from a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Text field
    Text(&'a str),
    /// Numeric field
    Number(f64),
    /// Boolean field (never ordered, only filtered on)
    Bool(bool),
    /// Field present with no value
    Null,
    /// Field not present on the record
    Absent,
    /// Array or object field, kept as JSON
    Nested(&'a serde_json::Value),
}

impl<'a> Value<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl<'a> From<&'a serde_json::Value> for Value<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Null => Value::Null,
            nested => Value::Nested(nested),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Magnitudes at or past this print in exponent form.
const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitudes below this print in exponent form.
const EXPONENT_BELOW: f64 = 1e-6;

/// Format a number the way a table cell shows it: integral values carry no
/// fractional part, non-finite values are spelled out, and very large or
/// very small magnitudes use a signed exponent (`1e+21`, `1.5e-7`).
fn format_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // covers -0.0
        f.write_str("0")
    } else if n.abs() >= EXPONENT_ABOVE || n.abs() < EXPONENT_BELOW {
        let text = format!("{:e}", n);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, exponent)
            }
            _ => f.write_str(&text),
        }
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => format_number(*n, f),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => f.write_str(NULL_PLACEHOLDER),
            Value::Absent => f.write_str(ABSENT_PLACEHOLDER),
            Value::Nested(json) => write!(f, "{}", json),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_numbers() {
        assert_eq!(Value::Number(25.0).to_string(), "25");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(-0.0).to_string(), "0");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_display_exponent_numbers() {
        assert_eq!(Value::Number(1e21).to_string(), "1e+21");
        assert_eq!(Value::Number(-2.5e22).to_string(), "-2.5e+22");
        assert_eq!(Value::Number(1e-7).to_string(), "1e-7");
        assert_eq!(Value::Number(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(Value::Number(0.000001).to_string(), "0.000001");
        assert_eq!(Value::Number(1e20).to_string(), "100000000000000000000");
    }

    #[test]
    fn test_display_placeholders() {
        assert_eq!(Value::Absent.to_string(), "undefined");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_from_json() {
        let doc = json!({"name": "Alice", "age": 25, "tags": ["a", "b"], "gone": null});
        assert_eq!(Value::from(&doc["name"]), Value::Text("Alice"));
        assert_eq!(Value::from(&doc["age"]), Value::Number(25.0));
        assert_eq!(Value::from(&doc["gone"]), Value::Null);
        assert_eq!(Value::from(&doc["tags"]).to_string(), r#"["a","b"]"#);
    }

    #[test]
    fn test_from_option() {
        let missing: Option<&str> = None;
        assert_eq!(Value::from(missing), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x"));
    }
}
