/// User profile endpoints
///
/// # Endpoints
///
/// - `GET /api/users/profile` - Public fields of the authenticated user
/// - `PUT /api/users/profile` - Update name and/or email
///
/// Both operate only on the user resolved from the bearer token; there is no
/// way to read or edit anybody else's profile.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::AppJson,
    middleware::auth::CurrentUser,
    response::Envelope,
};
use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use taskline_shared::{
    models::user::{PublicUser, UpdateProfile, User},
    validation::{normalize_email, NAME_MAX, NAME_MIN},
};
use validator::Validate;

/// Update profile request; both fields optional
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New display name
    #[validate(length(
        min = NAME_MIN,
        max = NAME_MAX,
        message = "Name must be between 2 and 50 characters"
    ))]
    pub name: Option<String>,

    /// New email address
    #[validate(email(message = "Please provide a valid email"))]
    pub email: Option<String>,
}

/// Profile payload
#[derive(Debug, Serialize)]
pub struct ProfileData {
    pub user: PublicUser,
}

/// Get the authenticated user's profile
///
/// Re-reads the row rather than trusting the middleware's copy; a vanished
/// user should not occur for a verified token but is handled as a 404.
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> ApiResult<Json<Envelope<ProfileData>>> {
    let user = User::find_by_id(&state.db, current.id())
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(Envelope::ok(ProfileData { user: user.into() })))
}

/// Update the authenticated user's profile
///
/// A supplied email that differs from the current one must not belong to
/// another user; that check happens before any write.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    AppJson(mut req): AppJson<UpdateProfileRequest>,
) -> ApiResult<Json<Envelope<ProfileData>>> {
    req.name = req.name.map(|n| n.trim().to_string());
    req.email = req.email.map(|e| normalize_email(&e));
    req.validate()?;

    let new_email = match req.email {
        Some(email) if email != current.0.email => {
            if User::email_taken(&state.db, &email, current.id()).await? {
                return Err(ApiError::Conflict("Email is already in use".to_string()));
            }
            Some(email)
        }
        // Same email as before is a no-op, not a conflict
        _ => None,
    };

    let user = User::update_profile(
        &state.db,
        current.id(),
        UpdateProfile {
            name: req.name,
            email: new_email,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(Envelope::ok_with_message(
        "Profile updated successfully",
        ProfileData { user: user.into() },
    )))
}
