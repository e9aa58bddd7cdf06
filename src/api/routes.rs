//! API route configuration.

use crate::api::handlers::{shortify_handler, unshortify_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shortify`                 - Create a short URL, or return the existing one
/// - `GET  /unshortify/{short_code}`  - Resolve a short code to its original URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shortify", post(shortify_handler))
        .route("/unshortify/{short_code}", get(unshortify_handler))
}
