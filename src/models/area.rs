//! Area model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Category tag stored for every seeded area
pub const COUNTRY: &str = "country";

/// A map area with the number of distinct visitors who marked it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Area {
    /// ISO 3166-1 alpha-3 code
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub area_type: String,
    /// Distinct visitors with a mark on this area
    pub count: i64,
}

/// An area as read from the seed dataset, before it reaches the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedArea {
    pub id: String,
    pub name: String,
}
