/// Authentication primitives for Taskline
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: Stateless session tokens (HS256 JWT)
///
/// Sessions are fully stateless: a signed, time-limited token embeds the
/// user id and verification is determined entirely by the signature and
/// expiry. There is no server-side session store.
///
/// # Example
///
/// ```no_run
/// use taskline_shared::auth::password::{hash_password, verify_password};
/// use taskline_shared::auth::jwt::{create_token, Claims};
/// use chrono::Duration;
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// let claims = Claims::new(Uuid::new_v4(), Duration::hours(24));
/// let token = create_token(&claims, "secret-key-at-least-32-bytes-long")?;
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod password;
