/// Response envelope
///
/// Every route, success or failure, responds with the same JSON shape:
///
/// ```json
/// { "success": bool, "message": "...", "data": { ... }, "errors": [ ... ] }
/// ```
///
/// `message`, `data`, and `errors` are omitted when unset. Handlers build
/// success envelopes here; error envelopes are produced by `ApiError`'s
/// `IntoResponse` impl so the two can never diverge in shape.

use serde::{Deserialize, Serialize};

/// A single failed field check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Field that failed validation
    pub field: String,

    /// Human-readable message
    pub message: String,
}

/// The response envelope wrapping every JSON body
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    /// Whether the request succeeded
    pub success: bool,

    /// Optional human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Payload on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Validation failures, reported as a list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl<T: Serialize> Envelope<T> {
    /// Success with a payload
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            errors: None,
        }
    }

    /// Success with a payload and a message
    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            errors: None,
        }
    }
}

impl Envelope<serde_json::Value> {
    /// Success with a message and no payload (e.g. after a delete)
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(serde_json::json!({})),
            errors: None,
        }
    }

    /// Failure with a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            errors: None,
        }
    }

    /// Failure carrying a list of field errors
    pub fn validation_errors(errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            message: Some("Validation failed".to_string()),
            data: None,
            errors: Some(errors),
        }
    }
}
