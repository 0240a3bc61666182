//! Short-lived cache in front of the area listing
//!
//! The listing joins every area against the marks table, and the map page
//! polls it, so a result is reused for a couple of seconds. Concurrent misses
//! each query the store and the last one to finish wins.

use std::{sync::Arc, time::Duration};

use tokio::{sync::RwLock, time::Instant};

use crate::{error::AppResult, models::Area, repository::AreaSource};

/// How long a computed listing is served before it is recomputed
pub const AREAS_TTL: Duration = Duration::from_secs(2);

struct Snapshot {
    areas: Arc<Vec<Area>>,
    computed_at: Instant,
}

#[derive(Clone)]
pub struct AreasCache {
    source: Arc<dyn AreaSource>,
    ttl: Duration,
    snapshot: Arc<RwLock<Option<Snapshot>>>,
}

impl AreasCache {
    pub fn new(source: Arc<dyn AreaSource>) -> Self {
        Self::with_ttl(source, AREAS_TTL)
    }

    pub fn with_ttl(source: Arc<dyn AreaSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            snapshot: Arc::new(RwLock::new(None)),
        }
    }

    /// Current area listing, recomputed when the cached one is too old.
    ///
    /// A failed recomputation is returned to the caller and the previous
    /// snapshot is kept.
    pub async fn get_areas(&self) -> AppResult<Arc<Vec<Area>>> {
        if let Some(areas) = self.fresh().await {
            return Ok(areas);
        }

        let areas = Arc::new(self.source.list_areas().await?);

        // areas and timestamp are swapped together
        *self.snapshot.write().await = Some(Snapshot {
            areas: areas.clone(),
            computed_at: Instant::now(),
        });

        Ok(areas)
    }

    async fn fresh(&self) -> Option<Arc<Vec<Area>>> {
        let guard = self.snapshot.read().await;
        guard
            .as_ref()
            .filter(|s| s.computed_at.elapsed() < self.ttl)
            .map(|s| s.areas.clone())
    }
}
