//! Marks repository

use sqlx::{Pool, Postgres};

use crate::error::{AppError, AppResult};

use super::{with_timeout, WRITE_TIMEOUT};

#[derive(Clone)]
pub struct MarksRepository {
    pool: Pool<Postgres>,
}

impl MarksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a mark; an existing (visitor, area) pair is left as is
    pub async fn record(&self, user_id: i32, area_id: &str) -> AppResult<()> {
        with_timeout("record_mark", WRITE_TIMEOUT, async {
            sqlx::query(
                r#"
                INSERT INTO marks (user_id, area_id)
                VALUES ($1, $2)
                ON CONFLICT (user_id, area_id) DO NOTHING
                "#,
            )
            .bind(user_id)
            .bind(area_id)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                    AppError::Validation(format!("Unknown area: {}", area_id))
                }
                other => AppError::Database(other),
            })?;
            Ok(())
        })
        .await
    }
}
