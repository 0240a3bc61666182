//! Repository layer for database operations

pub mod areas;
pub mod marks;
pub mod visitors;

use std::{future::Future, time::Duration};

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
    models::Area,
};

/// Deadline for listing queries
pub const LIST_TIMEOUT: Duration = Duration::from_secs(3);
/// Deadline for mutations
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(2);

/// Source of the per-area visitor counts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AreaSource: Send + Sync {
    async fn list_areas(&self) -> AppResult<Vec<Area>>;
}

/// Every store operation the HTTP layer needs
#[async_trait]
pub trait MapStore: AreaSource {
    /// Distinct names of visitors holding a mark, optionally on one area only
    async fn list_visitor_names(&self, area_id: Option<&str>) -> AppResult<Vec<String>>;

    /// Identity of the visitor with this name, created on first use
    async fn get_or_create_visitor(&self, name: &str) -> AppResult<i32>;

    /// Record that a visitor has been to an area; repeating a mark is a no-op
    async fn record_mark(&self, user_id: i32, area_id: &str) -> AppResult<()>;

    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub areas: areas::AreasRepository,
    pub visitors: visitors::VisitorsRepository,
    pub marks: marks::MarksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            areas: areas::AreasRepository::new(pool.clone()),
            visitors: visitors::VisitorsRepository::new(pool.clone()),
            marks: marks::MarksRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl AreaSource for Repository {
    async fn list_areas(&self) -> AppResult<Vec<Area>> {
        self.areas.list_with_counts().await
    }
}

#[async_trait]
impl MapStore for Repository {
    async fn list_visitor_names(&self, area_id: Option<&str>) -> AppResult<Vec<String>> {
        self.visitors.list_names(area_id).await
    }

    async fn get_or_create_visitor(&self, name: &str) -> AppResult<i32> {
        self.visitors.get_or_create(name).await
    }

    async fn record_mark(&self, user_id: i32, area_id: &str) -> AppResult<()> {
        self.marks.record(user_id, area_id).await
    }

    async fn ping(&self) -> AppResult<()> {
        with_timeout("ping", LIST_TIMEOUT, async {
            sqlx::query("SELECT 1").execute(&self.pool).await?;
            Ok(())
        })
        .await
    }
}

/// Run a store operation under its own deadline.
///
/// The inner future is dropped on expiry, which hands its connection back to
/// the pool (or closes it if a query was left mid-flight).
pub async fn with_timeout<T, F>(operation: &'static str, limit: Duration, fut: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| AppError::Timeout(operation))?
}

/// Create the pool and wait for PostgreSQL to accept connections.
///
/// The database container often starts after the server, so connectivity is
/// retried `connect_attempts` times before startup fails.
pub async fn connect(config: &DatabaseConfig) -> AppResult<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(config.connect_options());

    let mut last_error = None;
    for attempt in 1..=config.connect_attempts {
        match sqlx::query("SELECT 1").execute(&pool).await {
            Ok(_) => return Ok(pool),
            Err(e) => {
                tracing::warn!(
                    "Database not ready (attempt {}/{}): {}",
                    attempt,
                    config.connect_attempts,
                    e
                );
                last_error = Some(e);
            }
        }
        if attempt < config.connect_attempts {
            tokio::time::sleep(config.retry_delay()).await;
        }
    }

    pool.close().await;
    Err(AppError::Connectivity(format!(
        "{}:{} after {} attempts: {}",
        config.host,
        config.port,
        config.connect_attempts,
        last_error.map(|e| e.to_string()).unwrap_or_default()
    )))
}

/// Apply pending migrations from `./migrations`; nothing pending is a no-op
pub async fn run_migrations(pool: &Pool<Postgres>) -> AppResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
