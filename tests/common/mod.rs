#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::{Arc, Mutex};
use todo_service::api::routes::routes;
use todo_service::application::services::{ActivityGroupService, TodoItemService};
use todo_service::domain::entities::{
    ActivityGroup, NewActivityGroup, NewTodoItem, TodoItem, TodoItemPatch,
};
use todo_service::domain::repositories::{ActivityGroupRepository, TodoItemRepository};
use todo_service::error::AppError;
use todo_service::state::AppState;

/// In-memory activity group store with `BIGSERIAL`-like ids.
#[derive(Default)]
pub struct InMemoryActivityGroups {
    rows: Mutex<Vec<ActivityGroup>>,
    next_id: Mutex<i64>,
}

#[async_trait]
impl ActivityGroupRepository for InMemoryActivityGroups {
    async fn create(&self, new_group: NewActivityGroup) -> Result<ActivityGroup, AppError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let group = ActivityGroup::new(
            *next_id,
            new_group.title,
            new_group.email,
            new_group.created_at,
        );
        self.rows.lock().unwrap().push(group.clone());
        Ok(group)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ActivityGroup>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|g| g.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<ActivityGroup>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update_title(
        &self,
        id: i64,
        title: String,
    ) -> Result<Option<ActivityGroup>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|g| g.id == id).map(|g| {
            g.title = title;
            g.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|g| g.id != id);
        Ok(rows.len() < before)
    }
}

/// In-memory todo item store with `BIGSERIAL`-like ids.
#[derive(Default)]
pub struct InMemoryTodoItems {
    rows: Mutex<Vec<TodoItem>>,
    next_id: Mutex<i64>,
}

#[async_trait]
impl TodoItemRepository for InMemoryTodoItems {
    async fn create(&self, new_item: NewTodoItem) -> Result<TodoItem, AppError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let item = TodoItem::new(
            *next_id,
            new_item.activity_group_id,
            new_item.title,
            new_item.is_active,
            new_item.priority,
            new_item.created_at,
        );
        self.rows.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<TodoItem>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update(&self, id: i64, patch: TodoItemPatch) -> Result<Option<TodoItem>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|t| t.id == id).map(|t| {
            t.title = patch.title;
            t.priority = patch.priority;
            t.is_active = patch.is_active;
            t.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.id != id);
        Ok(rows.len() < before)
    }
}

/// Store that fails every call, as an unreachable database would.
pub struct UnavailableStore;

fn store_down() -> AppError {
    AppError::internal("connection refused")
}

#[async_trait]
impl ActivityGroupRepository for UnavailableStore {
    async fn create(&self, _: NewActivityGroup) -> Result<ActivityGroup, AppError> {
        Err(store_down())
    }

    async fn find_by_id(&self, _: i64) -> Result<Option<ActivityGroup>, AppError> {
        Err(store_down())
    }

    async fn list(&self) -> Result<Vec<ActivityGroup>, AppError> {
        Err(store_down())
    }

    async fn update_title(&self, _: i64, _: String) -> Result<Option<ActivityGroup>, AppError> {
        Err(store_down())
    }

    async fn delete(&self, _: i64) -> Result<bool, AppError> {
        Err(store_down())
    }
}

#[async_trait]
impl TodoItemRepository for UnavailableStore {
    async fn create(&self, _: NewTodoItem) -> Result<TodoItem, AppError> {
        Err(store_down())
    }

    async fn find_by_id(&self, _: i64) -> Result<Option<TodoItem>, AppError> {
        Err(store_down())
    }

    async fn list(&self) -> Result<Vec<TodoItem>, AppError> {
        Err(store_down())
    }

    async fn update(&self, _: i64, _: TodoItemPatch) -> Result<Option<TodoItem>, AppError> {
        Err(store_down())
    }

    async fn delete(&self, _: i64) -> Result<bool, AppError> {
        Err(store_down())
    }
}

pub fn create_test_state() -> AppState {
    state_with(
        Arc::new(InMemoryActivityGroups::default()),
        Arc::new(InMemoryTodoItems::default()),
    )
}

pub fn create_unavailable_state() -> AppState {
    state_with(Arc::new(UnavailableStore), Arc::new(UnavailableStore))
}

fn state_with(
    groups: Arc<dyn ActivityGroupRepository>,
    todos: Arc<dyn TodoItemRepository>,
) -> AppState {
    AppState::new(
        Arc::new(ActivityGroupService::new(groups)),
        Arc::new(TodoItemService::new(todos)),
    )
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(routes().with_state(state)).unwrap()
}
