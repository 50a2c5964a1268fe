/// User model and database operations
///
/// Users are created at registration and mutated by profile updates; this
/// API never deletes them. Email uniqueness is enforced by the store via a
/// unique index, and emails are normalized (trimmed, lowercased) before they
/// reach any query.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(50) NOT NULL,
///     email VARCHAR(255) NOT NULL UNIQUE,
///     password_hash VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User model representing an account row
///
/// The password hash never leaves the server: it is skipped during
/// serialization, so even a handler that returns a whole `User` cannot leak
/// it. Responses should still prefer [`PublicUser`].
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user id (UUID v4)
    pub id: Uuid,

    /// Display name (2-50 chars, enforced at the validation layer)
    pub name: String,

    /// Email address, stored normalized (trimmed, lowercased)
    ///
    /// Unique across all users
    pub email: String,

    /// Argon2id password hash, write-only from the API's perspective
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last updated
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a user, safe to return in responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Display name
    pub name: String,

    /// Normalized email address
    pub email: String,

    /// Argon2id password hash (NOT the plaintext password)
    pub password_hash: String,
}

/// Input for updating a user's profile
///
/// All fields are optional; only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    /// New display name
    pub name: Option<String>,

    /// New normalized email address
    pub email: Option<String>,
}

impl User {
    /// Creates a new user
    ///
    /// # Errors
    ///
    /// Returns a database error if the email already exists (unique
    /// constraint) or the connection fails. Callers are expected to check
    /// for an existing email first so they can report a proper conflict;
    /// the constraint is the backstop for races.
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by id
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by normalized email address
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Checks whether an email is held by a user other than `exclude_id`
    ///
    /// Used by profile updates: changing your email must fail with a
    /// conflict only if *another* user already holds it.
    pub async fn email_taken(
        pool: &PgPool,
        email: &str,
        exclude_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let existing: Option<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT id FROM users
            WHERE email = $1 AND id != $2
            "#,
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_optional(pool)
        .await?;

        Ok(existing.is_some())
    }

    /// Updates a user's profile fields
    ///
    /// Only non-None fields are written; `updated_at` is always bumped.
    /// Returns the updated user, or None if the row no longer exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: Uuid,
        data: UpdateProfile,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build the update statement from whichever fields are present
        let mut query = String::from("UPDATE users SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.name.is_some() {
            bind_count += 1;
            query.push_str(&format!(", name = ${}", bind_count));
        }
        if data.email.is_some() {
            bind_count += 1;
            query.push_str(&format!(", email = ${}", bind_count));
        }

        query.push_str(
            " WHERE id = $1 RETURNING id, name, email, password_hash, created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, User>(&query).bind(id);

        if let Some(name) = data.name {
            q = q.bind(name);
        }
        if let Some(email) = data.email {
            q = q.bind(email);
        }

        let user = q.fetch_optional(pool).await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password_hash"));
        assert!(json.contains("ann@example.com"));
    }

    #[test]
    fn test_public_user_projection() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let public = PublicUser::from(&user);
        assert_eq!(public.id, user.id);
        assert_eq!(public.name, user.name);
        assert_eq!(public.email, user.email);

        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
