/// Error handling for the API server
///
/// A single tagged error type maps every failure to its HTTP response. All
/// handlers return `Result<T, ApiError>`; the `IntoResponse` impl matches
/// the variants exhaustively, so the response-serialization layer never
/// inspects error "names" or "codes".
///
/// # Status mapping
///
/// | Variant      | Status | Meaning                                    |
/// |--------------|--------|--------------------------------------------|
/// | Validation   | 400    | malformed/missing input fields             |
/// | Conflict     | 400    | duplicate email (400 in this design)       |
/// | Unauthorized | 401    | missing/invalid/expired credential         |
/// | Forbidden    | 403    | authenticated but not the resource owner   |
/// | NotFound     | 404    | resource absent                            |
/// | Internal     | 500    | unexpected fault                           |
///
/// Internal errors are logged server-side; the client-visible detail is
/// suppressed unless diagnostic mode (`API_EXPOSE_ERRORS`) is enabled.

use crate::response::{Envelope, FieldError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use std::sync::OnceLock;
use taskline_shared::auth::{jwt::JwtError, password::PasswordError};

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing input fields (400), reported as a list
    Validation(Vec<FieldError>),

    /// Duplicate email (400 in this design, not 409)
    Conflict(String),

    /// Missing, invalid, or expired credential (401)
    Unauthorized(String),

    /// Authenticated but not the resource owner (403)
    Forbidden(String),

    /// Resource absent (404)
    NotFound(String),

    /// Unexpected fault (500)
    Internal(String),
}

impl ApiError {
    /// Convenience constructor for a single-field validation failure
    pub fn invalid_field(field: &str, message: &str) -> Self {
        ApiError::Validation(vec![FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }])
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(errors) => {
                write!(f, "Validation failed: {} errors", errors.len())
            }
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Whether internal error detail is exposed to clients
///
/// Read once from `API_EXPOSE_ERRORS`; detail is always logged server-side.
fn expose_internal_detail() -> bool {
    static EXPOSE: OnceLock<bool> = OnceLock::new();
    *EXPOSE.get_or_init(|| {
        std::env::var("API_EXPOSE_ERRORS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Envelope::validation_errors(errors),
            ),
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, Envelope::error(msg)),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, Envelope::error(msg)),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, Envelope::error(msg)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, Envelope::error(msg)),
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);

                let message = if expose_internal_detail() {
                    detail
                } else {
                    "An internal error occurred".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Envelope::error(message))
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Convert sqlx errors to API errors
///
/// The unique index on `users.email` is the backstop for concurrent
/// registrations that pass the pre-insert existence check.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                if let Some(constraint) = db_err.constraint() {
                    if constraint.contains("email") {
                        return ApiError::Conflict(
                            "User with this email already exists".to_string(),
                        );
                    }
                }
                ApiError::Internal(format!("Database error: {}", db_err))
            }
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Convert JWT errors to API errors
///
/// Expired tokens get a distinct message; everything else is "invalid".
impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Expired => ApiError::Unauthorized("Token expired".to_string()),
            JwtError::CreateError(msg) => ApiError::Internal(msg),
            _ => ApiError::Unauthorized("Invalid token".to_string()),
        }
    }
}

/// Convert password hashing errors to API errors
///
/// Hashing failures are never the client's fault.
impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::Internal(format!("Password operation failed: {}", err))
    }
}

/// Convert validator output into the validation error list
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let list: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| FieldError {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Validation failed".to_string()),
                })
            })
            .collect();

        ApiError::Validation(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(ApiError::invalid_field("title", "too long")),
            StatusCode::BAD_REQUEST
        );
        // Conflict is 400 in this design, not 409
        assert_eq!(
            status_of(ApiError::Conflict("email taken".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::Unauthorized("no token".into())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(ApiError::Forbidden("not owner".into())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(ApiError::NotFound("no task".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ApiError::Internal("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_expired_token_is_distinct() {
        let err = ApiError::from(JwtError::Expired);
        assert!(matches!(&err, ApiError::Unauthorized(msg) if msg.contains("expired")));

        let err = ApiError::from(JwtError::ValidationError("bad".into()));
        assert!(matches!(&err, ApiError::Unauthorized(msg) if msg.contains("Invalid")));
    }

    #[test]
    fn test_row_not_found_maps_to_404() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_display() {
        let err = ApiError::NotFound("Task not found".to_string());
        assert_eq!(err.to_string(), "Not found: Task not found");

        let err = ApiError::Validation(vec![]);
        assert_eq!(err.to_string(), "Validation failed: 0 errors");
    }
}
