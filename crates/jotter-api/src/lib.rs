pub mod auth;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod notes;
pub mod validate;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};

pub use auth::{AppState, AppStateInner};

/// Full application router. Layers like CORS and tracing are the binary's
/// concern; keeping assembly here lets tests drive the API in-process.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/notes", post(notes::create_note))
        .route("/notes", get(notes::list_notes))
        .route("/notes/{id}", get(notes::get_note))
        .route("/notes/{id}", put(notes::update_note))
        .route("/notes/{id}", delete(notes::delete_note))
        .layer(from_fn_with_state(state.clone(), middleware::require_auth))
        .with_state(state);

    public_routes.merge(protected_routes)
}
