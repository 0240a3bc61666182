//! Mark recording endpoint

use axum::{body::Bytes, extract::State, http::StatusCode};

use crate::{
    error::{AppError, AppResult},
    models::MarkRequest,
    AppState,
};

/// Record that a visitor has been to an area
///
/// The body is decoded as JSON whatever its declared content type.
#[utoipa::path(
    post,
    path = "/api/mark",
    tag = "visitors",
    request_body = MarkRequest,
    responses(
        (status = 200, description = "Mark recorded"),
        (status = 400, description = "Missing user or area_id, unknown area, or invalid JSON", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal error", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_mark(State(state): State<AppState>, body: Bytes) -> AppResult<StatusCode> {
    let request: MarkRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON: {}", e)))?;

    state.services.visits.mark(&request).await?;
    Ok(StatusCode::OK)
}
