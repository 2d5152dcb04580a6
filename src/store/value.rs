use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single column value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Int(v) => Some(*v != 0),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Equality used by predicates. Booleans compare equal to the integers
    /// 0 and 1, the way flag columns are stored.
    pub fn matches(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(b), Value::Int(i)) | (Value::Int(i), Value::Bool(b)) => {
                i64::from(*b) == *i
            }
            (a, b) => a == b,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(b) => write!(f, "{}", i64::from(*b)),
            Value::Int(v) => write!(f, "{}", v),
            Value::Text(s) => write!(f, "'{}'", s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// A record as written to or read from the store: column name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(BTreeMap<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column, builder style.
    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.put(column, value);
        self
    }

    pub fn put(&mut self, column: &str, value: impl Into<Value>) {
        self.0.insert(column.to_string(), value.into());
    }

    /// Column value; missing columns read as `Null`.
    pub fn get(&self, column: &str) -> &Value {
        const NULL: &Value = &Value::Null;
        self.0.get(column).unwrap_or(NULL)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.get(column).is_some_and(|v| !v.is_null())
    }

    pub fn get_i64(&self, column: &str) -> Option<i64> {
        self.get(column).as_i64()
    }

    pub fn get_bool(&self, column: &str) -> Option<bool> {
        self.get(column).as_bool()
    }

    pub fn get_str(&self, column: &str) -> Option<&str> {
        self.get(column).as_str()
    }

    /// Overwrite this row's columns with every column of `changes`.
    pub fn apply(&mut self, changes: &Row) {
        for (column, value) in &changes.0 {
            self.0.insert(column.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from(5i64), Value::Int(5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("x"), Value::Text("x".to_string()));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(3i64)), Value::Int(3));
    }

    #[test]
    fn test_bool_matches_flag_integers() {
        assert!(Value::Bool(true).matches(&Value::Int(1)));
        assert!(Value::Int(0).matches(&Value::Bool(false)));
        assert!(!Value::Bool(true).matches(&Value::Int(0)));
        assert!(!Value::Int(1).matches(&Value::Text("1".to_string())));
    }

    #[test]
    fn test_row_missing_column_is_null() {
        let row = Row::new().with("a", 1i64);
        assert!(row.get("b").is_null());
        assert!(!row.contains("b"));
        assert_eq!(row.get_i64("a"), Some(1));
    }

    #[test]
    fn test_row_apply_overwrites() {
        let mut row = Row::new().with("favorited", true).with("text", "hi");
        row.apply(&Row::new().with("favorited", false));
        assert_eq!(row.get_bool("favorited"), Some(false));
        assert_eq!(row.get_str("text"), Some("hi"));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_row_json_is_flat_object() {
        let row = Row::new()
            .with("tweet_id", 100i64)
            .with("favorited", false)
            .with("retweeted_by", None::<String>);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"favorited":false,"retweeted_by":null,"tweet_id":100}"#
        );
        let back: Row = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
