//! Response envelope shared by all entity clients.

use serde::Deserialize;
use serde::Serialize;

/// Error payload of a failed envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// The uniform success/data/error wrapper every collaborator returns.
///
/// Field names serialize in the backend's camelCase shape, so an envelope
/// round-trips against real payloads.
///
/// # Example
///
/// ```
/// use freightdesk::client::ApiResponse;
///
/// let response = ApiResponse::ok(vec![1, 2, 3]);
/// assert!(response.is_successful);
/// assert_eq!(response.data.unwrap().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub is_successful: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    /// Creates a success envelope.
    pub fn ok(data: T) -> Self {
        Self {
            is_successful: true,
            data: Some(data),
            error: None,
        }
    }

    /// Creates a failure envelope.
    pub fn fail(message: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            is_successful: false,
            data: None,
            error: Some(ApiError {
                message: message.into(),
                details,
            }),
        }
    }

    /// The failure message, if this is a failure envelope.
    pub fn failure_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }
}
