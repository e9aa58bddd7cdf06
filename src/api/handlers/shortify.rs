//! Handler for the creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::shortify::{ShortifyRequest, ShortifyResponse};
use crate::application::services::CreateOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL, or returns the existing one for an already known URL.
///
/// # Endpoint
///
/// `POST /api/shortify`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_code": "aB3xY9",
///   "short_url": "https://short.fy/aB3xY9",
///   "original_url": "https://example.com/some/long/path"
/// }
/// ```
///
/// - **201 Created** with a `Location` header for a new mapping
/// - **200 OK** when the URL was already shortened
///
/// # Errors
///
/// - **400** `validation_error` (including unparseable bodies) / `invalid_url`
/// - **500** `code_generation_failed`
/// - **503** `store_unavailable`
pub async fn shortify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortifyRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let shortened = state.registry.create(&payload.original_url).await?;
    let outcome = shortened.outcome;
    let body = ShortifyResponse::from(shortened);

    let response = match outcome {
        CreateOutcome::Created => {
            let location = format!("/api/unshortify/{}", body.short_code);
            (StatusCode::CREATED, [(header::LOCATION, location)], Json(body)).into_response()
        }
        CreateOutcome::Existing => (StatusCode::OK, Json(body)).into_response(),
    };

    Ok(response)
}
