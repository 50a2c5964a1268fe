//! # Taskline API Server
//!
//! REST API for the Taskline task manager:
//! - Email/password authentication issuing stateless session tokens
//! - Owner-scoped task CRUD with free-text search and status filtering
//! - Profile management for the authenticated user
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgresql://localhost/taskline \
//! JWT_SECRET=$(openssl rand -hex 32) \
//! cargo run -p taskline-api
//! ```

use taskline_api::{
    app::{build_router, AppState},
    config::Config,
};
use taskline_shared::db::{
    migrations::run_migrations,
    pool::{create_pool, DatabaseConfig},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskline_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Taskline API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    if config.api.expose_errors {
        tracing::warn!("API_EXPOSE_ERRORS is enabled; internal error detail will reach clients");
    }

    let pool = create_pool(DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    run_migrations(&pool).await?;

    let bind_address = config.bind_address();
    let state = AppState::new(pool, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
