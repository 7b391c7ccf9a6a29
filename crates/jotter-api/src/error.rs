use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::{IntoResponse, Response}};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Every error a handler can surface, with its wire message as the display
/// string. Internal failures collapse into `BadRequest` so callers never
/// see store or runtime detail.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid data")]
    Validation,
    #[error("Unauthorized: Token not provided")]
    TokenMissing,
    #[error("Forbidden: Invalid token")]
    TokenInvalid,
    #[error("User not found")]
    UserNotFound,
    #[error("Unauthorized: Invalid username or password")]
    BadCredentials,
    #[error("Bad request")]
    BadRequest,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::TokenMissing => StatusCode::UNAUTHORIZED,
            ApiError::TokenInvalid => StatusCode::FORBIDDEN,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::BadCredentials => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        error!("request failed: {err:#}");
        ApiError::BadRequest
    }
}

/// A well-formed body with missing or mistyped fields fails like any other
/// validation miss; JSON that does not parse at all is a plain 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_) => ApiError::BadRequest,
            _ => ApiError::Validation,
        }
    }
}
