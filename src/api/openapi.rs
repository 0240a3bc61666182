//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{areas, health, marks, visitors};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Visit Map API",
        version = "0.1.0",
        description = "Shared map of visited countries"
    ),
    paths(
        health::health_check,
        health::readiness_check,
        areas::list_areas,
        visitors::list_visitors,
        marks::create_mark,
    ),
    components(
        schemas(
            crate::models::Area,
            crate::models::MarkRequest,
            crate::models::VisitorQuery,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "areas", description = "Map areas and visitor counts"),
        (name = "visitors", description = "Visitors and their marks")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
