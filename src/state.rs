//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ActivityGroupService, TodoItemService};

/// Services shared across requests.
///
/// The store handle lives inside the repositories behind each service; no
/// handler reaches the database directly.
#[derive(Clone)]
pub struct AppState {
    pub activity_group_service: Arc<ActivityGroupService>,
    pub todo_item_service: Arc<TodoItemService>,
}

impl AppState {
    pub fn new(
        activity_group_service: Arc<ActivityGroupService>,
        todo_item_service: Arc<TodoItemService>,
    ) -> Self {
        Self {
            activity_group_service,
            todo_item_service,
        }
    }
}
