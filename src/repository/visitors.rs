//! Visitors repository

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

use super::{with_timeout, LIST_TIMEOUT, WRITE_TIMEOUT};

#[derive(Clone)]
pub struct VisitorsRepository {
    pool: Pool<Postgres>,
}

impl VisitorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Names of visitors with at least one mark, optionally on the given area only
    pub async fn list_names(&self, area_id: Option<&str>) -> AppResult<Vec<String>> {
        with_timeout("list_visitor_names", LIST_TIMEOUT, async {
            let names: Vec<String> = sqlx::query_scalar(
                r#"
                SELECT DISTINCT u.name
                FROM users u
                JOIN marks m ON u.id = m.user_id
                WHERE ($1::text IS NULL OR m.area_id = $1)
                "#,
            )
            .bind(area_id)
            .fetch_all(&self.pool)
            .await?;
            Ok(names)
        })
        .await
    }

    /// Return the id of the visitor with this name, inserting it if needed.
    ///
    /// A concurrent insert of the same name makes ours a no-op, in which case
    /// the committed row is read back.
    pub async fn get_or_create(&self, name: &str) -> AppResult<i32> {
        with_timeout("get_or_create_visitor", WRITE_TIMEOUT, async {
            let inserted: Option<i32> = sqlx::query_scalar(
                r#"
                INSERT INTO users (name)
                VALUES ($1)
                ON CONFLICT (name) DO NOTHING
                RETURNING id
                "#,
            )
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

            if let Some(id) = inserted {
                return Ok(id);
            }

            let id: i32 = sqlx::query_scalar("SELECT id FROM users WHERE name = $1")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;
            Ok(id)
        })
        .await
    }
}
