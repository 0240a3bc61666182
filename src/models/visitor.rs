//! Visitor and mark request types

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Mark request body: `{"user": "Alice", "area_id": "FRA"}`
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct MarkRequest {
    /// Visitor display name
    #[serde(default)]
    #[validate(length(min = 1, message = "user is required"))]
    pub user: String,
    /// Area code the visitor has been to
    #[serde(default)]
    #[validate(length(min = 1, message = "area_id is required"))]
    pub area_id: String,
}

/// Query parameters for the visitor listing
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct VisitorQuery {
    /// Restrict to visitors who marked this area
    pub area_id: Option<String>,
}

impl VisitorQuery {
    /// Area filter, with an empty value treated as no filter
    pub fn area_filter(&self) -> Option<&str> {
        self.area_id.as_deref().filter(|s| !s.is_empty())
    }
}
