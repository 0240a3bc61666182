//! Area listing endpoint

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{error::AppResult, models::Area, AppState};

/// List every area with its number of distinct visitors
#[utoipa::path(
    get,
    path = "/api/areas",
    tag = "areas",
    responses(
        (status = 200, description = "Areas with visitor counts", body = Vec<Area>),
        (status = 500, description = "Internal error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_areas(State(state): State<AppState>) -> AppResult<Json<Arc<Vec<Area>>>> {
    let areas = state.services.areas.get_areas().await?;
    Ok(Json(areas))
}
