use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// -- JWT Claims --

/// JWT claims shared between jotter-api (token issuance in the login
/// handler) and its auth middleware. Tokens carry the username only and
/// have no expiry, so verification must not require an `exp` claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
}

// -- Auth --

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub username: String,
    pub email: String,
    pub access_token: String,
}

// -- Notes --

#[derive(Debug, Deserialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub creation: DateTime<Utc>,
    pub last_edit: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteCreatedResponse {
    pub message: String,
    pub note_id: i64,
    pub title: String,
    pub content: String,
    pub creation: DateTime<Utc>,
    pub last_edit: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdatedResponse {
    pub message: String,
    pub title: String,
    pub content: String,
    pub last_edit: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
