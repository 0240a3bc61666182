//! Visitor listing endpoint

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{error::AppResult, models::VisitorQuery, AppState};

/// List visitor names, optionally only those who marked one area
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "visitors",
    params(VisitorQuery),
    responses(
        (status = 200, description = "Visitor names", body = Vec<String>),
        (status = 500, description = "Internal error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_visitors(
    State(state): State<AppState>,
    Query(query): Query<VisitorQuery>,
) -> AppResult<Json<Vec<String>>> {
    let names = state
        .services
        .visits
        .list_visitor_names(query.area_filter())
        .await?;
    Ok(Json(names))
}
