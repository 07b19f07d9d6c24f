//! Spec validation errors

/// Error raised when a column or field specification is malformed.
///
/// Specs are developer-authored configuration, not user input, so a bad
/// spec fails at engine construction instead of surfacing later as a
/// runtime validation anomaly.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpecError {
    /// A column or field spec has an empty key.
    #[error("spec key must not be empty")]
    EmptyKey,

    /// Two specs in the same engine share a key.
    #[error("duplicate spec key '{key}'")]
    DuplicateKey { key: String },

    /// A field's numeric bounds are inverted.
    #[error("field '{key}': min {min} exceeds max {max}")]
    InvalidBounds { key: String, min: f64, max: f64 },

    /// A field's length bounds are inverted.
    #[error("field '{key}': min_length {min} exceeds max_length {max}")]
    InvalidLengthBounds { key: String, min: usize, max: usize },
}

impl SpecError {
    /// Creates a duplicate-key error.
    pub fn duplicate(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }
}
