/// Password hashing using Argon2id
///
/// Passwords are hashed with Argon2id before storage and are write-only from
/// the API's perspective: the hash is never serialized into a response, and
/// the plaintext only exists for the duration of a register/login request.
///
/// # Security
///
/// - **Algorithm**: Argon2id (hybrid of Argon2i and Argon2d)
/// - **Memory**: 64 MB (65536 KB)
/// - **Iterations**: 3 passes
/// - **Parallelism**: 4 lanes
/// - **Output**: 32-byte hash
///
/// # Example
///
/// ```
/// use taskline_shared::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("super_secret_password_123")?;
///
/// assert!(verify_password("super_secret_password_123", &hash)?);
/// assert!(!verify_password("wrong_password", &hash)?);
/// # Ok(())
/// # }
/// ```

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, ParamsBuilder, Version,
};

/// Error type for password hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password
    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    /// Invalid password hash format
    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),
}

/// Hashes a password using Argon2id
///
/// Produces a PHC string (algorithm, parameters, salt, and hash), e.g.:
/// ```text
/// $argon2id$v=19$m=65536,t=3,p=4$c2FsdHNhbHRzYWx0$hash...
/// ```
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    // 64 MB memory, 3 iterations, 4 lanes
    let params = ParamsBuilder::new()
        .m_cost(65536)
        .t_cost(3)
        .p_cost(4)
        .output_len(32)
        .build()
        .map_err(|e| PasswordError::HashError(format!("Invalid parameters: {}", e)))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params);

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(format!("Hash generation failed: {}", e)))?;

    Ok(password_hash.to_string())
}

/// Verifies a password against a stored hash
///
/// Comparison is constant-time. Returns `Ok(false)` for a wrong password;
/// errors are reserved for malformed hashes.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| PasswordError::InvalidHash(format!("Failed to parse hash: {}", e)))?;

    // A PHC string with algorithm and salt but no hash output still parses;
    // treat it as malformed rather than a mismatch.
    if parsed_hash.hash.is_none() {
        return Err(PasswordError::InvalidHash(
            "Hash output missing from PHC string".to_string(),
        ));
    }

    // Parameters are embedded in the hash
    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(format!(
            "Verification failed: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_format() {
        let hash = hash_password("test_password_123").expect("Hash should succeed");

        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("v=19"));
        assert!(hash.contains("m=65536"));
        assert!(hash.contains("t=3"));
        assert!(hash.contains("p=4"));
    }

    #[test]
    fn test_hash_password_produces_different_salts() {
        let hash1 = hash_password("same_password").expect("Hash 1 should succeed");
        let hash2 = hash_password("same_password").expect("Hash 2 should succeed");

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_password_correct() {
        let hash = hash_password("correct_password").expect("Hash should succeed");

        assert!(verify_password("correct_password", &hash).expect("Verify should succeed"));
    }

    #[test]
    fn test_verify_password_incorrect() {
        let hash = hash_password("correct_password").expect("Hash should succeed");

        assert!(!verify_password("wrong_password", &hash).expect("Verify should succeed"));
        assert!(!verify_password("", &hash).expect("Verify should succeed"));
    }

    #[test]
    fn test_verify_password_invalid_hash() {
        assert!(verify_password("password", "invalid_hash").is_err());

        // Parses as a PHC string but carries no hash output
        let err = verify_password("password", "$argon2id$invalid").unwrap_err();
        assert!(matches!(err, PasswordError::InvalidHash(_)));
    }

    #[test]
    fn test_hash_verify_roundtrip() {
        let passwords = vec![
            "simple",
            "with spaces",
            "with-special-chars!@#$%",
            "unicode-密码-パスワード",
        ];

        for password in passwords {
            let hash = hash_password(password).expect("Hash should succeed");
            let verified = verify_password(password, &hash).expect("Verify should succeed");
            assert!(verified, "Password '{}' should verify", password);
        }
    }
}
