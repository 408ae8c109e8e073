//! PostgreSQL implementation of the todo item repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewTodoItem, TodoItem, TodoItemPatch};
use crate::domain::repositories::TodoItemRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct TodoRow {
    todo_id: i64,
    activity_group_id: i64,
    title: String,
    is_active: bool,
    priority: String,
    created_at: DateTime<Utc>,
}

impl From<TodoRow> for TodoItem {
    fn from(row: TodoRow) -> Self {
        TodoItem::new(
            row.todo_id,
            row.activity_group_id,
            row.title,
            row.is_active,
            row.priority,
            row.created_at,
        )
    }
}

/// PostgreSQL repository for todo items.
///
/// Updates never write `created_at`, so the insert timestamp survives every
/// `PATCH`.
pub struct PgTodoItemRepository {
    pool: Arc<PgPool>,
}

impl PgTodoItemRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoItemRepository for PgTodoItemRepository {
    async fn create(&self, new_item: NewTodoItem) -> Result<TodoItem, AppError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (activity_group_id, title, is_active, priority, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING todo_id, activity_group_id, title, is_active, priority, created_at
            "#,
        )
        .bind(new_item.activity_group_id)
        .bind(new_item.title)
        .bind(new_item.is_active)
        .bind(new_item.priority)
        .bind(new_item.created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, AppError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT todo_id, activity_group_id, title, is_active, priority, created_at
            FROM todos
            WHERE todo_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<TodoItem>, AppError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT todo_id, activity_group_id, title, is_active, priority, created_at
            FROM todos
            ORDER BY todo_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, patch: TodoItemPatch) -> Result<Option<TodoItem>, AppError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos SET
                title     = $2,
                priority  = $3,
                is_active = $4
            WHERE todo_id = $1
            RETURNING todo_id, activity_group_id, title, is_active, priority, created_at
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.priority)
        .bind(patch.is_active)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM todos WHERE todo_id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
