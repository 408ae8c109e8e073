//! Todo item management service.

use crate::domain::entities::{DEFAULT_PRIORITY, NewTodoItem, TodoItem, TodoItemPatch};
use crate::domain::repositories::TodoItemRepository;
use crate::error::AppError;
use crate::utils::timestamp::current_timestamp;
use std::sync::Arc;

/// Service for the todo item lifecycle.
///
/// New items always get [`DEFAULT_PRIORITY`]; callers cannot choose a
/// priority until the first update.
pub struct TodoItemService {
    repository: Arc<dyn TodoItemRepository>,
}

impl TodoItemService {
    /// Creates a new todo item service.
    pub fn new(repository: Arc<dyn TodoItemRepository>) -> Self {
        Self { repository }
    }

    /// Lists every todo item ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the table is empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_todo_items(&self) -> Result<Vec<TodoItem>, AppError> {
        let items = self.repository.list().await?;

        if items.is_empty() {
            return Err(AppError::not_found("No data found"));
        }

        Ok(items)
    }

    /// Retrieves a todo item by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_todo_item(&self, id: i64) -> Result<TodoItem, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("No data found"))
    }

    /// Creates a todo item with the default priority and current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_todo_item(
        &self,
        activity_group_id: i64,
        title: String,
        is_active: bool,
    ) -> Result<TodoItem, AppError> {
        let new_item = NewTodoItem {
            activity_group_id,
            title,
            is_active,
            priority: DEFAULT_PRIORITY.to_string(),
            created_at: current_timestamp(),
        };

        let created = self.repository.create(new_item).await?;
        tracing::debug!(id = created.id, activity_group_id, "Todo item created");

        Ok(created)
    }

    /// Rewrites title, priority and the active flag of a todo item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpdateTargetMissing`] if no item has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_todo_item(
        &self,
        id: i64,
        patch: TodoItemPatch,
    ) -> Result<TodoItem, AppError> {
        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::update_target_missing("Todo item not found."))
    }

    /// Deletes a todo item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_todo_item(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found(format!(
                "Todo item with ID {} Not Found",
                id
            )));
        }

        Ok(())
    }
}
