/// Database migration runner
///
/// Migrations live in the `migrations/` directory at the workspace root and
/// are embedded into the binary at compile time via `sqlx::migrate!`. The
/// API server runs them on startup, so a fresh database needs no manual
/// schema setup.
///
/// # Example
///
/// ```no_run
/// use taskline_shared::db::pool::{create_pool, DatabaseConfig};
/// use taskline_shared::db::migrations::run_migrations;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// run_migrations(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::postgres::PgPool;
use tracing::info;

/// Runs all pending database migrations
///
/// Already-applied migrations are skipped; each pending migration runs in a
/// transaction and a failure rolls back and returns the error.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Running database migrations");

    sqlx::migrate!("../migrations").run(pool).await?;

    info!("Database schema is up to date");

    Ok(())
}
