/// Application state and router builder
///
/// This module defines the shared application state and builds the Axum
/// router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskline_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = taskline_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, middleware::auth::bearer_auth, response::Envelope};
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    routing::post,
    Json, Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. The pool
/// clones cheaply and the config is behind an Arc; there is no other shared
/// mutable state between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets the JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }

    /// Gets the token lifetime
    pub fn jwt_expiry(&self) -> chrono::Duration {
        chrono::Duration::hours(self.config.jwt.expires_hours)
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /api
/// ├── GET  /health              # Health check (public)
/// ├── /auth/                    # Public
/// │   ├── POST /register
/// │   └── POST /login
/// ├── /users/                   # Bearer-protected
/// │   ├── GET /profile
/// │   └── PUT /profile
/// └── /tasks/                   # Bearer-protected, owner-scoped
///     ├── GET    /              # ?search=&status=
///     ├── POST   /
///     ├── GET    /:id
///     ├── PUT    /:id
///     └── DELETE /:id
/// ```
///
/// Unknown paths fall through to a 404 envelope so every response, including
/// routing misses, has the same shape.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Public routes
    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login));

    // Profile routes (require bearer auth)
    let user_routes = Router::new()
        .route(
            "/profile",
            get(routes::users::get_profile).put(routes::users::update_profile),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            bearer_auth,
        ));

    // Task routes (require bearer auth; handlers enforce ownership)
    let task_routes = Router::new()
        .route(
            "/",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/:id",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            bearer_auth,
        ));

    let api_routes = Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/auth", auth_routes)
        .nest("/users", user_routes)
        .nest("/tasks", task_routes);

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Fallback for unknown routes
async fn not_found() -> (StatusCode, Json<Envelope<serde_json::Value>>) {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::error("Route not found")),
    )
}
