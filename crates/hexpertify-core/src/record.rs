//! Row records and the cell values read out of them.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde_json::{Map, Value};

/// A value read out of a row record for a single column key.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Explicit null.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Plain text.
    Text(String),
    /// Nested list or object, kept as JSON.
    Json(Value),
}

impl CellValue {
    /// Whether this value counts as present when deciding on the `N/A`
    /// fallback.
    ///
    /// Null, `false`, zero, NaN and the empty string are empty. Lists and
    /// objects are always present, even when they have no entries.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Null => false,
            CellValue::Bool(b) => *b,
            CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Json(_) => true,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "null"),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => n
                .as_f64()
                .map(CellValue::Number)
                .unwrap_or_else(|| CellValue::Text(n.to_string())),
            Value::String(s) => CellValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => CellValue::Json(value.clone()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// An arbitrary keyed record that can be projected into table cells.
///
/// No shape is enforced beyond what the columns read: a missing key is
/// simply `None`.
pub trait RowRecord {
    /// Look up the value stored under `key`.
    fn field(&self, key: &str) -> Option<CellValue>;
}

impl RowRecord for Map<String, Value> {
    fn field(&self, key: &str) -> Option<CellValue> {
        self.get(key).map(CellValue::from)
    }
}

impl RowRecord for Value {
    fn field(&self, key: &str) -> Option<CellValue> {
        match self {
            Value::Object(map) => map.field(key),
            _ => None,
        }
    }
}

impl RowRecord for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<CellValue> {
        self.get(key).map(|s| CellValue::from(s.as_str()))
    }
}

impl RowRecord for BTreeMap<String, String> {
    fn field(&self, key: &str) -> Option<CellValue> {
        self.get(key).map(|s| CellValue::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!CellValue::Null.is_truthy());
        assert!(!CellValue::Bool(false).is_truthy());
        assert!(!CellValue::Number(0.0).is_truthy());
        assert!(!CellValue::Number(f64::NAN).is_truthy());
        assert!(!CellValue::from("").is_truthy());
        assert!(CellValue::from("Ada").is_truthy());
        assert!(CellValue::Number(-1.5).is_truthy());
        assert!(CellValue::Json(json!([])).is_truthy());
    }

    #[test]
    fn test_json_record_lookup() {
        let row = json!({ "name": "Ada", "age": 36, "tags": ["math"] });
        assert_eq!(row.field("name"), Some(CellValue::from("Ada")));
        assert_eq!(row.field("age").map(|v| v.to_string()), Some("36".into()));
        assert_eq!(
            row.field("tags").map(|v| v.to_string()),
            Some(r#"["math"]"#.into())
        );
        assert_eq!(row.field("missing"), None);
        assert_eq!(json!("scalar").field("name"), None);
    }

    #[test]
    fn test_string_map_lookup() {
        let mut row = HashMap::new();
        row.insert("city".to_string(), "Paris".to_string());
        assert_eq!(row.field("city"), Some(CellValue::from("Paris")));
        assert_eq!(row.field("country"), None);
    }
}
