use jotter_types::api::{LoginRequest, NotePayload, RegisterRequest};

use crate::error::ApiError;

/// Per-route payload checks, run before any business logic. A failed check
/// short-circuits the handler with 422 and leaves no side effects.

pub fn register(req: &RegisterRequest) -> Result<(), ApiError> {
    if char_len(&req.username) < 3 || !is_email(&req.email) || char_len(&req.password) < 8 {
        return Err(ApiError::Validation);
    }
    Ok(())
}

pub fn login(req: &LoginRequest) -> Result<(), ApiError> {
    if char_len(&req.username) < 3 || char_len(&req.password) < 8 {
        return Err(ApiError::Validation);
    }
    Ok(())
}

pub fn note(payload: &NotePayload) -> Result<(), ApiError> {
    if char_len(&payload.title) < 3 || char_len(&payload.content) < 10 {
        return Err(ApiError::Validation);
    }
    Ok(())
}

// Minimum lengths count characters, not bytes, so multibyte input is not
// waved through short.
fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Shape check only: one '@' with a non-empty local part and a dotted
/// domain, no whitespace. Deliverability is not our problem.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
