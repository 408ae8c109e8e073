//! Handlers for todo item endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use chrono::Utc;

use crate::api::dto::envelope::{DeletedResource, Envelope};
use crate::api::dto::todo_item::{
    CreateTodoItemRequest, CreatedTodoItem, TodoItemView, UpdateTodoItemRequest,
    UpdatedTodoItem, is_truthy,
};
use crate::api::extract::{JsonPayload, ListQuery, PathId};
use crate::domain::entities::TodoItemPatch;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all todo items.
///
/// # Endpoint
///
/// `GET /todo-items`
///
/// # Errors
///
/// Returns 404 if the table is empty.
pub async fn list_todo_items_handler(
    State(state): State<AppState>,
    ListQuery(params): ListQuery,
) -> Result<Json<Envelope<Vec<TodoItemView>>>, AppError> {
    let items = state.todo_item_service.list_todo_items().await?;

    let views = items.into_iter().map(TodoItemView::from).collect();

    Ok(Json(
        Envelope::success("Success", views).with_location(params.include_location()),
    ))
}

/// Fetches one todo item.
///
/// # Endpoint
///
/// `GET /todo-items/{id}`
///
/// # Errors
///
/// Returns 404 if no item has this id.
pub async fn get_todo_item_handler(
    path: PathId,
    State(state): State<AppState>,
) -> Result<Json<Envelope<TodoItemView>>, AppError> {
    let id = path.value.ok_or_else(|| AppError::not_found("No data found"))?;

    let item = state.todo_item_service.get_todo_item(id).await?;

    Ok(Json(Envelope::success("Success", item.into())))
}

/// Creates a todo item.
///
/// # Endpoint
///
/// `POST /todo-items`
///
/// # Request Body
///
/// ```json
/// { "title": "Write report", "activity_group_id": 1, "is_active": true }
/// ```
///
/// The stored priority is always `very-high`, whatever the body says.
///
/// # Errors
///
/// Returns 400 if the content type is not JSON or a field is missing/falsy.
pub async fn create_todo_item_handler(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<CreateTodoItemRequest>,
) -> Result<(StatusCode, Json<Envelope<CreatedTodoItem>>), AppError> {
    let input = payload.into_input()?;

    let item = state
        .todo_item_service
        .create_todo_item(
            input.activity_group_id,
            input.title,
            is_truthy(&input.is_active),
        )
        .await?;

    let data = CreatedTodoItem {
        id: item.id,
        activity_group_id: item.activity_group_id,
        title: item.title,
        is_active: input.is_active,
        priority: item.priority,
        created_at: item.created_at,
        updated_at: item.created_at,
    };

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success("Todo item added successfully", data)),
    ))
}

/// Updates title, priority and the active flag of a todo item.
///
/// # Endpoint
///
/// `PATCH /todo-items/{id}`
///
/// `createdAt` comes from the stored row and never changes. `updatedAt` is
/// taken when the request arrives.
///
/// # Errors
///
/// Returns 400 if any of `title`, `priority`, `is_active`, `status` is missing.
/// Returns 404 if no item has this id.
pub async fn update_todo_item_handler(
    path: PathId,
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<UpdateTodoItemRequest>,
) -> Result<Json<Envelope<UpdatedTodoItem>>, AppError> {
    let updated_at = Utc::now();

    let input = payload.into_input()?;
    let id = path
        .value
        .ok_or_else(|| AppError::update_target_missing("Todo item not found."))?;

    let patch = TodoItemPatch {
        title: input.title,
        priority: input.priority,
        is_active: is_truthy(&input.is_active),
    };

    let item = state.todo_item_service.update_todo_item(id, patch).await?;

    Ok(Json(Envelope::success(
        "Success",
        UpdatedTodoItem {
            id: item.id,
            title: item.title,
            priority: item.priority,
            is_active: input.is_active,
            status: input.status,
            created_at: item.created_at,
            updated_at,
        },
    )))
}

/// Deletes a todo item.
///
/// # Endpoint
///
/// `DELETE /todo-items/{id}`
///
/// # Errors
///
/// Returns 404 if no item has this id.
pub async fn delete_todo_item_handler(
    path: PathId,
    State(state): State<AppState>,
) -> Result<Json<Envelope<DeletedResource>>, AppError> {
    let id = path
        .value
        .ok_or_else(|| AppError::not_found(format!("Todo item with ID {} Not Found", path.raw)))?;

    state.todo_item_service.delete_todo_item(id).await?;

    Ok(Json(Envelope::success(
        format!("Todo item with ID {} Deleted", id),
        DeletedResource { id },
    )))
}
