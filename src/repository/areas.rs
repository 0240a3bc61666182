//! Areas repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{area::COUNTRY, Area, SeedArea},
};

use super::{with_timeout, LIST_TIMEOUT};

#[derive(Clone)]
pub struct AreasRepository {
    pool: Pool<Postgres>,
}

impl AreasRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List every area with its count of distinct visitors (0 when unmarked)
    pub async fn list_with_counts(&self) -> AppResult<Vec<Area>> {
        with_timeout("list_areas", LIST_TIMEOUT, async {
            let rows = sqlx::query_as::<_, Area>(
                r#"
                SELECT a.id, a.name, a.type, COUNT(DISTINCT m.user_id) AS count
                FROM areas a
                LEFT JOIN marks m ON a.id = m.area_id
                GROUP BY a.id
                "#,
            )
            .fetch_all(&self.pool)
            .await?;
            Ok(rows)
        })
        .await
    }

    /// Insert the seed areas in one transaction, leaving existing rows untouched.
    ///
    /// Any failed insert rolls the whole batch back.
    pub async fn insert_missing(&self, areas: &[SeedArea]) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        for area in areas {
            sqlx::query(
                r#"
                INSERT INTO areas (id, type, name)
                VALUES ($1, $2, $3)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&area.id)
            .bind(COUNTRY)
            .bind(&area.name)
            .execute(&mut *tx)
            .await
            .map_err(|source| AppError::Seed {
                area_id: area.id.clone(),
                source,
            })?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Number of stored areas
    pub async fn count(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM areas")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
