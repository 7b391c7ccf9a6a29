use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use tracing::{error, warn};

use jotter_db::models::NoteRow;
use jotter_types::api::{
    Claims, MessageResponse, NoteCreatedResponse, NotePayload, NoteResponse, NoteUpdatedResponse,
};

use crate::auth::AppState;
use crate::error::ApiError;
use crate::extract::Json;
use crate::validate;

pub async fn create_note(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
    Json(payload): Json<NotePayload>,
) -> Result<impl IntoResponse, ApiError> {
    validate::note(&payload)?;

    let now = Utc::now();
    let stamp = now.to_rfc3339();

    // Run blocking DB insert off the async runtime
    let db = state.clone();
    let (title, content) = (payload.title.clone(), payload.content.clone());
    let note_id = tokio::task::spawn_blocking(move || {
        db.db.insert_note(&title, &content, &stamp, &stamp)
    })
    .await
    .map_err(|e| { error!("spawn_blocking join error: {}", e); ApiError::BadRequest })??;

    Ok((
        StatusCode::CREATED,
        Json(NoteCreatedResponse {
            message: "Note created".into(),
            note_id,
            title: payload.title,
            content: payload.content,
            creation: now,
            last_edit: now,
        }),
    ))
}

pub async fn list_notes(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let rows = tokio::task::spawn_blocking(move || db.db.get_notes())
        .await
        .map_err(|e| { error!("spawn_blocking join error: {}", e); ApiError::BadRequest })??;

    let notes: Vec<NoteResponse> = rows.into_iter().map(note_response).collect();
    Ok(Json(notes))
}

/// A missing note is `200 null`, not a 404. The store layer reports the
/// miss explicitly; the wire contract keeps the null for compatibility.
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(_claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_note_id(&id)?;
    let db = state.clone();
    let row = tokio::task::spawn_blocking(move || db.db.get_note(id))
        .await
        .map_err(|e| { error!("spawn_blocking join error: {}", e); ApiError::BadRequest })??;

    Ok(Json(row.map(note_response)))
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(_claims): Extension<Claims>,
    Json(payload): Json<NotePayload>,
) -> Result<impl IntoResponse, ApiError> {
    validate::note(&payload)?;
    let id = parse_note_id(&id)?;

    let now = Utc::now();
    let stamp = now.to_rfc3339();

    let db = state.clone();
    let (title, content) = (payload.title.clone(), payload.content.clone());
    let matched = tokio::task::spawn_blocking(move || {
        db.db.update_note(id, &title, &content, &stamp)
    })
    .await
    .map_err(|e| { error!("spawn_blocking join error: {}", e); ApiError::BadRequest })??;

    // Updating a note that does not exist is a plain 400, not a 404.
    if !matched {
        return Err(ApiError::BadRequest);
    }

    Ok(Json(NoteUpdatedResponse {
        message: "Note updated".into(),
        title: payload.title,
        content: payload.content,
        last_edit: now,
    }))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(_claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_note_id(&id)?;
    let db = state.clone();
    tokio::task::spawn_blocking(move || db.db.delete_note(id))
        .await
        .map_err(|e| { error!("spawn_blocking join error: {}", e); ApiError::BadRequest })??;

    Ok(Json(MessageResponse {
        message: "Note deleted".into(),
    }))
}

/// Ids arrive as path text. One that does not read as a number cannot be
/// matched against the numeric id column, so the lookup is refused with
/// the same JSON 400 any other store failure gets.
fn parse_note_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::BadRequest)
}

fn note_response(row: NoteRow) -> NoteResponse {
    NoteResponse {
        id: row.id,
        title: row.title,
        content: row.content,
        creation: parse_timestamp(&row.creation, row.id),
        last_edit: parse_timestamp(&row.last_edit, row.id),
    }
}

fn parse_timestamp(raw: &str, note_id: i64) -> DateTime<Utc> {
    raw.parse::<DateTime<Utc>>().unwrap_or_else(|e| {
        warn!("Corrupt timestamp '{}' on note {}: {}", raw, note_id, e);
        DateTime::default()
    })
}
