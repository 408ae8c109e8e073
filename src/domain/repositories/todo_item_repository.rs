//! Repository trait for todo items.

use crate::domain::entities::{NewTodoItem, TodoItem, TodoItemPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `todos` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTodoItemRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoItemRepository: Send + Sync {
    /// Inserts a new todo item and returns it with its generated id.
    async fn create(&self, new_item: NewTodoItem) -> Result<TodoItem, AppError>;

    /// Finds a todo item by its primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, AppError>;

    /// Lists all todo items ordered by id.
    async fn list(&self) -> Result<Vec<TodoItem>, AppError>;

    /// Rewrites title, priority and the active flag in a single statement.
    ///
    /// Returns `None` when no row matched the id. `created_at` is preserved.
    async fn update(&self, id: i64, patch: TodoItemPatch) -> Result<Option<TodoItem>, AppError>;

    /// Deletes a todo item by id. Returns `false` when no row matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
