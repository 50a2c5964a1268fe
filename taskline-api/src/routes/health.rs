/// Health check endpoint
///
/// # Endpoint
///
/// ```text
/// GET /api/health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "data": { "status": "healthy", "version": "0.1.0", "database": "connected" }
/// }
/// ```

use crate::{app::AppState, error::ApiResult, response::Envelope};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Health check payload
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Service status
    pub status: String,

    /// Application version
    pub version: String,

    /// Database status
    pub database: String,
}

/// Health check handler
///
/// Reports service liveness and database connectivity.
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<Envelope<HealthStatus>>> {
    let database = match sqlx::query("SELECT 1").fetch_one(&state.db).await {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };

    let status = if database == "connected" {
        "healthy"
    } else {
        "degraded"
    };

    Ok(Json(Envelope::ok(HealthStatus {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    })))
}
