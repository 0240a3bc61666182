//! API handlers for the visit map endpoints

pub mod areas;
pub mod health;
pub mod marks;
pub mod openapi;
pub mod visitors;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use crate::AppState;

/// Create the application router with all routes.
///
/// Paths outside the API are served from the static directory.
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.server.static_dir);

    let api = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/ready", get(health::readiness_check))
        .route("/api/areas", get(areas::list_areas))
        .route("/api/users", get(visitors::list_visitors))
        .route("/api/mark", post(marks::create_mark))
        .with_state(state);

    // Every request is logged with method, path, status and latency
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(trace)
}
