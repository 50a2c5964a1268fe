/// Database models for Taskline
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `user`: User accounts (registration, login, profile)
/// - `task`: Personal tasks with owner scoping, search, and status filtering
///
/// # Example
///
/// ```no_run
/// use taskline_shared::models::user::{User, CreateUser};
/// use taskline_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     CreateUser {
///         name: "Ann".to_string(),
///         email: "ann@example.com".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
