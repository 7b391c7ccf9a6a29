use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::auth::{self, AppState};
use crate::error::ApiError;

/// Guard for the note routes. The Authorization header value is the token
/// itself, with no `Bearer ` scheme prefix.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::TokenMissing)?;

    let claims = auth::verify_token(&state.jwt_secret, token).map_err(|_| ApiError::TokenInvalid)?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
