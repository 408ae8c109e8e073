//! API route configuration.

use crate::api::handlers::{
    create_activity_group_handler, create_todo_item_handler, delete_activity_group_handler,
    delete_todo_item_handler, get_activity_group_handler, get_todo_item_handler,
    list_activity_groups_handler, list_todo_items_handler, update_activity_group_handler,
    update_todo_item_handler,
};
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All resource routes.
///
/// # Endpoints
///
/// - `GET    /activity-groups`        - List activity groups (`?location=true`)
/// - `POST   /activity-groups`        - Create an activity group
/// - `GET    /activity-groups/{id}`   - Fetch one activity group
/// - `PATCH  /activity-groups/{id}`   - Change its title
/// - `DELETE /activity-groups/{id}`   - Delete it
/// - `GET    /todo-items`             - List todo items (`?location=true`)
/// - `POST   /todo-items`             - Create a todo item
/// - `GET    /todo-items/{id}`        - Fetch one todo item
/// - `PATCH  /todo-items/{id}`        - Update title/priority/is_active/status
/// - `DELETE /todo-items/{id}`        - Delete it
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/activity-groups",
            get(list_activity_groups_handler).post(create_activity_group_handler),
        )
        .route(
            "/activity-groups/{id}",
            get(get_activity_group_handler)
                .patch(update_activity_group_handler)
                .delete(delete_activity_group_handler),
        )
        .route(
            "/todo-items",
            post(create_todo_item_handler).get(list_todo_items_handler),
        )
        .route(
            "/todo-items/{id}",
            get(get_todo_item_handler)
                .patch(update_todo_item_handler)
                .delete(delete_todo_item_handler),
        )
        .fallback(route_not_found)
}

/// Unknown paths still answer with the envelope.
async fn route_not_found() -> AppError {
    AppError::not_found("Route not found")
}
