/// Configuration management for the API server
///
/// Configuration is loaded from environment variables, with a `.env` file
/// picked up in development via dotenvy.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: PostgreSQL connection string (required)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `JWT_SECRET`: Secret key for token signing (required, min 32 chars)
/// - `JWT_EXPIRES_HOURS`: Token lifetime in hours (default: 24)
/// - `CORS_ORIGINS`: Comma-separated allowed origins (default: *)
/// - `API_EXPOSE_ERRORS`: Include internal error detail in responses
///   (default: false; diagnostic mode only)
/// - `RUST_LOG`: Log filter (default: info)

use serde::{Deserialize, Serialize};
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Session token configuration
    pub jwt: JwtConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Allowed CORS origins ("*" means permissive)
    pub cors_origins: Vec<String>,

    /// Whether internal error detail is exposed to clients
    ///
    /// Keep this off outside development; internal detail is always logged
    /// server-side regardless.
    pub expose_errors: bool,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in pool
    pub max_connections: u32,
}

/// Session token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Secret key for token signing
    ///
    /// Must be at least 32 bytes. Generate with: `openssl rand -hex 32`
    pub secret: String,

    /// Token lifetime in hours
    pub expires_hours: i64,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value fails
    /// to parse.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let expose_errors = env::var("API_EXPOSE_ERRORS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()?;

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET environment variable is required"))?;

        if jwt_secret.len() < 32 {
            anyhow::bail!("JWT_SECRET must be at least 32 characters long");
        }

        let expires_hours = env::var("JWT_EXPIRES_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse::<i64>()?;

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
                cors_origins,
                expose_errors,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            jwt: JwtConfig {
                secret: jwt_secret,
                expires_hours,
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}
