//! Column specifications

use crate::model::Value;

/// Formatter turning a raw cell value into display text.
pub type CellFormatter = fn(&Value) -> String;

/// Declarative metadata for one displayable/sortable projection of a record.
///
/// # Example
///
/// ```
/// use gridform::table::ColumnSpec;
///
/// let columns = vec![
///     ColumnSpec::new("plateNumber", "Plate Number").sortable(),
///     ColumnSpec::new("capacity", "Capacity").formatter(|v| format!("{v} kg")),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    /// Record key this column projects.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Whether header activation toggles sorting on this column.
    pub sortable: bool,
    /// Optional display formatter; columns without one render the raw value.
    pub formatter: Option<CellFormatter>,
}

impl ColumnSpec {
    /// Creates a non-sortable, unformatted column.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            formatter: None,
        }
    }

    /// Makes the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sets the display formatter.
    pub fn formatter(mut self, formatter: CellFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Display text for a cell of this column.
    pub fn render(&self, value: &Value) -> String {
        match self.formatter {
            Some(format) => format(value),
            None => value.to_string(),
        }
    }
}
