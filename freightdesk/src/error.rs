//! Error types

/// Errors raised by the screen glue when wiring records and form values back
/// to entities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The record carries no id, so it cannot address a backend entity.
    #[error("record has no id")]
    MissingId,

    /// The id value does not parse as a UUID.
    #[error("malformed id '{value}'")]
    InvalidId { value: String },

    /// A form value is missing or has the wrong shape for the entity field.
    #[error("field '{field}' is missing or malformed")]
    BadField { field: String },
}

impl ServiceError {
    /// Creates a bad-field error.
    pub fn bad_field(field: impl Into<String>) -> Self {
        Self::BadField {
            field: field.into(),
        }
    }

    /// Creates a malformed-id error.
    pub fn invalid_id(value: impl Into<String>) -> Self {
        Self::InvalidId {
            value: value.into(),
        }
    }
}
