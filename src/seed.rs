//! Startup seeding of the areas table from a GeoJSON feature collection

use std::{collections::HashMap, path::Path};

use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::SeedArea,
    repository::areas::AreasRepository,
};

/// Property holding the stable area code
pub const CODE_PROPERTY: &str = "ISO3166-1-Alpha-3";
/// Property holding the display name
pub const NAME_PROPERTY: &str = "name";

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<HashMap<String, Value>>,
}

impl Feature {
    fn text_property(&self, key: &str) -> Option<&str> {
        self.properties
            .as_ref()?
            .get(key)?
            .as_str()
            .filter(|s| !s.is_empty())
    }
}

/// Extract the areas described by a GeoJSON document.
///
/// Features without a non-empty code or name are skipped. Geometry and any
/// other property are ignored.
pub fn parse_area_features(data: &[u8]) -> Result<Vec<SeedArea>, serde_json::Error> {
    let collection: FeatureCollection = serde_json::from_slice(data)?;

    let total = collection.features.len();
    let areas: Vec<SeedArea> = collection
        .features
        .iter()
        .filter_map(|feature| {
            Some(SeedArea {
                id: feature.text_property(CODE_PROPERTY)?.to_string(),
                name: feature.text_property(NAME_PROPERTY)?.to_string(),
            })
        })
        .collect();

    if areas.len() < total {
        tracing::debug!(
            "Skipped {} of {} features without code or name",
            total - areas.len(),
            total
        );
    }

    Ok(areas)
}

/// Load the dataset at `path` and insert any area not yet stored.
///
/// Returns the number of valid features found in the file. Running it again
/// on the same file changes nothing.
pub async fn seed_areas(areas: &AreasRepository, path: &Path) -> AppResult<usize> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::SeedData(format!("{}: {}", path.display(), e)))?;

    let features = parse_area_features(&data)
        .map_err(|e| AppError::SeedData(format!("{}: {}", path.display(), e)))?;

    areas.insert_missing(&features).await?;

    Ok(features.len())
}
