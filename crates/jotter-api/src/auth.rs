use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::{SaltString, rand_core::OsRng}};
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use jotter_db::Database;
use jotter_types::api::{Claims, LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

use crate::error::ApiError;
use crate::extract::Json;
use crate::validate;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub jwt_secret: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate::register(&req)?;

    // Hashing happens here, in the handler, not as a store-side hook.
    let password_hash = hash_password(&req.password)?;

    // A uniqueness violation on username or email lands here as a store
    // error and surfaces as a plain 400.
    state.db.create_user(&req.username, &req.email, &password_hash)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created".into(),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate::login(&req)?;

    let user = state
        .db
        .get_user_by_username(&req.username)?
        .ok_or(ApiError::UserNotFound)?;

    if !verify_password(&req.password, &user.password)? {
        return Err(ApiError::BadCredentials);
    }

    let access_token = issue_token(&state.jwt_secret, &user.username)?;

    Ok(Json(LoginResponse {
        username: user.username,
        email: user.email,
        access_token,
    }))
}

pub fn hash_password(plain: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> Result<bool, ApiError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("stored hash unparseable: {e}"))?;

    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed_hash)
        .is_ok())
}

pub fn issue_token(secret: &str, username: &str) -> Result<String, ApiError> {
    let claims = Claims {
        username: username.to_string(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| anyhow::anyhow!("token signing failed: {e}"))?;

    Ok(token)
}

/// Tokens carry no `exp`, so expiry validation is switched off entirely.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;

    Ok(data.claims)
}
