/// Authentication endpoints
///
/// # Endpoints
///
/// - `POST /api/auth/register` - Register a new user
/// - `POST /api/auth/login` - Login with email/password
///
/// Both return a signed session token plus the public user fields. Login
/// reports the same message for an unknown email and a wrong password so a
/// caller cannot tell which emails are registered.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::AppJson,
    response::Envelope,
};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use taskline_shared::{
    auth::{jwt, password},
    models::user::{CreateUser, PublicUser, User},
    validation::{normalize_email, NAME_MAX, NAME_MIN, PASSWORD_MIN},
};
use validator::Validate;

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name
    #[validate(length(
        min = NAME_MIN,
        max = NAME_MAX,
        message = "Name must be between 2 and 50 characters"
    ))]
    pub name: String,

    /// Email address
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,

    /// Password (hashed before storage, never stored in plaintext)
    #[validate(length(min = PASSWORD_MIN, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,

    /// Password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Session payload returned by register and login
#[derive(Debug, Serialize)]
pub struct SessionData {
    /// Public user fields (no password hash)
    pub user: PublicUser,

    /// Signed session token
    pub token: String,
}

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /api/auth/register
/// Content-Type: application/json
///
/// { "name": "Ann", "email": "ann@example.com", "password": "secret1" }
/// ```
///
/// # Errors
///
/// - `400`: Validation failed, or email already registered
/// - `500`: Server error
pub async fn register(
    State(state): State<AppState>,
    AppJson(mut req): AppJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<Envelope<SessionData>>)> {
    // Normalize before validation so the checks see what will be stored
    req.name = req.name.trim().to_string();
    req.email = normalize_email(&req.email);
    req.validate()?;

    // Fail with a conflict before any mutation; the unique index on email
    // is the backstop for concurrent registrations
    if User::find_by_email(&state.db, &req.email).await?.is_some() {
        return Err(ApiError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let password_hash = password::hash_password(&req.password)?;

    let user = User::create(
        &state.db,
        CreateUser {
            name: req.name,
            email: req.email,
            password_hash,
        },
    )
    .await?;

    let claims = jwt::Claims::new(user.id, state.jwt_expiry());
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok_with_message(
            "User registered successfully",
            SessionData {
                user: user.into(),
                token,
            },
        )),
    ))
}

/// Login with email and password
///
/// # Endpoint
///
/// ```text
/// POST /api/auth/login
/// Content-Type: application/json
///
/// { "email": "ann@example.com", "password": "secret1" }
/// ```
///
/// # Errors
///
/// - `400`: Validation failed
/// - `401`: Unknown email or wrong password (indistinguishable by design)
/// - `500`: Server error
pub async fn login(
    State(state): State<AppState>,
    AppJson(mut req): AppJson<LoginRequest>,
) -> ApiResult<Json<Envelope<SessionData>>> {
    req.email = normalize_email(&req.email);
    req.validate()?;

    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    let valid = password::verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let claims = jwt::Claims::new(user.id, state.jwt_expiry());
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    Ok(Json(Envelope::ok_with_message(
        "Login successful",
        SessionData {
            user: user.into(),
            token,
        },
    )))
}
