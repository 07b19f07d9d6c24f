//! Opaque row records

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// An opaque, string-keyed bag of values representing one row.
///
/// The table engine assumes no fixed shape: search scans every value a
/// record happens to carry, and sorting looks a column key up on demand.
/// A missing key behaves like [`Value::Null`].
///
/// # Example
///
/// ```
/// use gridform::model::Record;
///
/// let row = Record::new()
///     .set("name", "Central Depot")
///     .set("capacity", 1200i64);
/// assert_eq!(row.get_str("name"), Some("Central Depot"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over all field values, in no particular order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }

    /// Iterates over all field keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    // -------------------------------------------------------------------------
    // Typed conveniences
    // -------------------------------------------------------------------------

    /// String content of a field, if present and a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Numeric content of a field, if present and numeric.
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.fields.get(field).and_then(Value::as_f64)
    }

    /// Integer content of a field, if present and an integer.
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        match self.fields.get(field) {
            Some(Value::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Boolean content of a field, if present and a bool.
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        match self.fields.get(field) {
            Some(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
