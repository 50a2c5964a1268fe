/// Bearer-token authentication middleware
///
/// Protected routes are wrapped in [`bearer_auth`], which:
///
/// 1. Extracts the `Authorization: Bearer <token>` header (missing → 401)
/// 2. Validates the token's signature and expiry (invalid → 401, expired →
///    401 with a distinct message)
/// 3. Resolves the embedded user id against the database (user gone → 404)
/// 4. Inserts [`CurrentUser`] into request extensions
///
/// Handlers extract the acting user with `Extension<CurrentUser>`:
///
/// ```ignore
/// async fn handler(Extension(current): Extension<CurrentUser>) { /* ... */ }
/// ```
///
/// Verification is stateless: no session store is consulted, only the token
/// itself plus one user lookup.

use crate::{app::AppState, error::ApiError};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use taskline_shared::{auth::jwt, models::user::User};

/// The authenticated user, attached to request extensions
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// The acting user's id
    pub fn id(&self) -> uuid::Uuid {
        self.0.id
    }
}

/// Middleware enforcing bearer-token authentication
pub async fn bearer_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Not authorized, no token provided".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Expected Bearer token".to_string()))?;

    // Signature + expiry; expired tokens surface distinctly via From<JwtError>
    let claims = jwt::validate_token(token, state.jwt_secret())?;

    // The token is stateless, so the user may have vanished since issuance
    let user = User::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
