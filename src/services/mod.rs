//! Business logic services

pub mod areas_cache;
pub mod visits;

use std::sync::Arc;

use crate::{
    error::AppResult,
    repository::{AreaSource, MapStore},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub areas: areas_cache::AreasCache,
    pub visits: visits::VisitsService,
    store: Arc<dyn MapStore>,
}

impl Services {
    /// Create all services over the given store
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: MapStore + 'static,
    {
        let source: Arc<dyn AreaSource> = store.clone();
        let store: Arc<dyn MapStore> = store;

        Self {
            areas: areas_cache::AreasCache::new(source),
            visits: visits::VisitsService::new(store.clone()),
            store,
        }
    }

    /// Check that the store answers
    pub async fn ready(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
