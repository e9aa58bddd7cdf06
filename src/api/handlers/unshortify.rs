//! Handler for the resolution endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::unshortify::UnshortifyResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/unshortify/{short_code}`
///
/// # Errors
///
/// - **404** `not_found` if the code was never issued
/// - **503** `store_unavailable`
pub async fn unshortify_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<Json<UnshortifyResponse>, AppError> {
    let resolved = state.registry.resolve(&short_code).await?;

    Ok(Json(resolved.into()))
}
