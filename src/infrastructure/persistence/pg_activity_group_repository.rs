//! PostgreSQL implementation of the activity group repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{ActivityGroup, NewActivityGroup};
use crate::domain::repositories::ActivityGroupRepository;
use crate::error::AppError;

/// Row shape of the `activities` table.
#[derive(Debug, FromRow)]
struct ActivityRow {
    activity_id: i64,
    title: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<ActivityRow> for ActivityGroup {
    fn from(row: ActivityRow) -> Self {
        ActivityGroup::new(row.activity_id, row.title, row.email, row.created_at)
    }
}

/// PostgreSQL repository for activity groups.
pub struct PgActivityGroupRepository {
    pool: Arc<PgPool>,
}

impl PgActivityGroupRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityGroupRepository for PgActivityGroupRepository {
    async fn create(&self, new_group: NewActivityGroup) -> Result<ActivityGroup, AppError> {
        let row = sqlx::query_as::<_, ActivityRow>(
            r#"
            INSERT INTO activities (title, email, created_at)
            VALUES ($1, $2, $3)
            RETURNING activity_id, title, email, created_at
            "#,
        )
        .bind(new_group.title)
        .bind(new_group.email)
        .bind(new_group.created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ActivityGroup>, AppError> {
        let row = sqlx::query_as::<_, ActivityRow>(
            r#"
            SELECT activity_id, title, email, created_at
            FROM activities
            WHERE activity_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<ActivityGroup>, AppError> {
        let rows = sqlx::query_as::<_, ActivityRow>(
            r#"
            SELECT activity_id, title, email, created_at
            FROM activities
            ORDER BY activity_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update_title(
        &self,
        id: i64,
        title: String,
    ) -> Result<Option<ActivityGroup>, AppError> {
        // Existence check and update in one round trip.
        let row = sqlx::query_as::<_, ActivityRow>(
            r#"
            UPDATE activities SET title = $2
            WHERE activity_id = $1
            RETURNING activity_id, title, email, created_at
            "#,
        )
        .bind(id)
        .bind(title)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM activities WHERE activity_id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
