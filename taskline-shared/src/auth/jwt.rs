/// JWT token generation and validation
///
/// Session tokens are signed with HS256 (HMAC-SHA256) and embed the user id
/// as the `sub` claim. Verification is stateless: signature, expiry, and
/// issuer are checked, nothing else is consulted.
///
/// # Security
///
/// - **Algorithm**: HS256 (HMAC with SHA-256)
/// - **Expiration**: configurable, default 24 hours
/// - **Validation**: signature, expiration, issuer, and not-before checks
/// - **Secret management**: secrets should be at least 32 bytes
///
/// An expired token is reported distinctly from an otherwise invalid one so
/// the API can tell the client which of the two happened.
///
/// # Example
///
/// ```
/// use taskline_shared::auth::jwt::{create_token, validate_token, Claims};
/// use chrono::Duration;
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let user_id = Uuid::new_v4();
/// let claims = Claims::new(user_id, Duration::hours(24));
/// let token = create_token(&claims, "secret-key-at-least-32-bytes-long")?;
///
/// let validated = validate_token(&token, "secret-key-at-least-32-bytes-long")?;
/// assert_eq!(validated.sub, user_id);
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Issuer claim stamped on every token
const ISSUER: &str = "taskline";

/// Error type for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Token failed signature/format validation
    #[error("Invalid token: {0}")]
    ValidationError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,

    /// Token was signed for a different issuer
    #[error("Invalid token issuer")]
    InvalidIssuer,
}

/// JWT claims structure
///
/// # Claims
///
/// - `sub`: Subject (user id)
/// - `iss`: Issuer (always "taskline")
/// - `iat`: Issued at timestamp
/// - `exp`: Expiration timestamp
/// - `nbf`: Not before timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user id
    pub sub: Uuid,

    /// Issuer - always "taskline"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,
}

impl Claims {
    /// Creates claims for a user, expiring after `expires_in`
    pub fn new(user_id: Uuid, expires_in: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + expires_in;

        Self {
            sub: user_id,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            nbf: now.timestamp(),
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Creates a signed session token from claims
///
/// # Errors
///
/// Returns `JwtError::CreateError` if encoding fails.
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Validates a session token and extracts its claims
///
/// Verifies the signature, checks `exp`/`nbf`, and requires the issuer to be
/// "taskline". Returns `JwtError::Expired` for expired tokens so callers can
/// surface a distinct message.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;
    validation.validate_nbf = true;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidIssuer => JwtError::InvalidIssuer,
        _ => JwtError::ValidationError(format!("Token validation failed: {}", e)),
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

    #[test]
    fn test_claims_creation() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, Duration::hours(24));

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.iss, "taskline");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_create_and_validate_token() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, Duration::hours(1));
        let token = create_token(&claims, SECRET).expect("Should create token");

        let validated = validate_token(&token, SECRET).expect("Should validate token");
        assert_eq!(validated.sub, user_id);
        assert_eq!(validated.iss, "taskline");
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let claims = Claims::new(Uuid::new_v4(), Duration::hours(1));
        let token = create_token(&claims, SECRET).expect("Should create token");

        let result = validate_token(&token, "wrong-secret");
        assert!(result.is_err());
        assert!(!matches!(result.unwrap_err(), JwtError::Expired));
    }

    #[test]
    fn test_validate_expired_token() {
        // Negative duration = already expired
        let claims = Claims::new(Uuid::new_v4(), Duration::seconds(-3600));
        assert!(claims.is_expired());

        let token = create_token(&claims, SECRET).expect("Should create token");
        let result = validate_token(&token, SECRET);

        assert!(matches!(result.unwrap_err(), JwtError::Expired));
    }

    #[test]
    fn test_validate_garbage_token() {
        let result = validate_token("not-a-token", SECRET);
        assert!(matches!(result.unwrap_err(), JwtError::ValidationError(_)));
    }

    #[test]
    fn test_validate_foreign_issuer() {
        // Token signed with the right secret but a different issuer claim
        #[derive(serde::Serialize)]
        struct ForeignClaims {
            sub: Uuid,
            iss: String,
            iat: i64,
            exp: i64,
            nbf: i64,
        }

        let now = Utc::now().timestamp();
        let foreign = ForeignClaims {
            sub: Uuid::new_v4(),
            iss: "someone-else".to_string(),
            iat: now,
            exp: now + 3600,
            nbf: now,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &foreign,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let result = validate_token(&token, SECRET);
        assert!(matches!(result.unwrap_err(), JwtError::InvalidIssuer));
    }
}
