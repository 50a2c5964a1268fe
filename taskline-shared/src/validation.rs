/// Shared field-constraint contract
///
/// Every length limit and enumerated value the API accepts is defined here,
/// once. Request DTOs in the API crate reference these constants from their
/// `#[validate]` attributes, so the server-side checks and any client built
/// against this crate cannot drift apart.
///
/// # Constraints
///
/// | Field       | Rule                                   |
/// |-------------|----------------------------------------|
/// | name        | 2–50 characters after trimming         |
/// | email       | valid format, trimmed and lowercased   |
/// | password    | at least 6 characters (registration)   |
/// | title       | 1–100 characters after trimming        |
/// | description | 1–500 characters after trimming        |
/// | status      | `pending`, `in-progress`, `completed`  |
/// | search      | at most 100 characters                 |

use validator::ValidationError;

/// Minimum length of a user's display name
pub const NAME_MIN: u64 = 2;

/// Maximum length of a user's display name
pub const NAME_MAX: u64 = 50;

/// Minimum password length accepted at registration
pub const PASSWORD_MIN: u64 = 6;

/// Minimum length of a task title
pub const TITLE_MIN: u64 = 1;

/// Maximum length of a task title
pub const TITLE_MAX: u64 = 100;

/// Minimum length of a task description
pub const DESCRIPTION_MIN: u64 = 1;

/// Maximum length of a task description
pub const DESCRIPTION_MAX: u64 = 500;

/// Maximum length of a free-text search query
pub const SEARCH_MAX: u64 = 100;

/// The accepted task status values, as they appear on the wire
pub const STATUS_VALUES: [&str; 3] = ["pending", "in-progress", "completed"];

/// Normalizes an email address for storage and lookup
///
/// Emails are compared case-insensitively, so they are trimmed and lowercased
/// before they ever touch the database. Both registration and login must go
/// through this so that `A@x.com` and `a@x.com` resolve to the same account.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validator for optional task status fields
///
/// Used via `#[validate(custom(function = "..."))]` on request DTOs that
/// carry a status as a raw string.
pub fn validate_status(status: &str) -> Result<(), ValidationError> {
    if STATUS_VALUES.contains(&status) {
        Ok(())
    } else {
        let mut err = ValidationError::new("status");
        err.message = Some("Status must be one of: pending, in-progress, completed".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ann@Example.COM "), "ann@example.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }

    #[test]
    fn test_validate_status_accepts_known_values() {
        for value in STATUS_VALUES {
            assert!(validate_status(value).is_ok(), "'{}' should be valid", value);
        }
    }

    #[test]
    fn test_validate_status_rejects_unknown_values() {
        assert!(validate_status("done").is_err());
        assert!(validate_status("Pending").is_err());
        assert!(validate_status("").is_err());
    }
}
