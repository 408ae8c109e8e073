//! DTOs for todo item endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use validator::{Validate, ValidationError};

use crate::domain::entities::TodoItem;
use crate::error::AppError;

/// Presence check used for loosely typed flags.
///
/// `null`, `false`, `0` and `""` count as missing.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn validate_truthy(value: &Value) -> Result<(), ValidationError> {
    if is_truthy(value) {
        Ok(())
    } else {
        Err(ValidationError::new("required"))
    }
}

fn validate_non_zero(value: i64) -> Result<(), ValidationError> {
    if value != 0 {
        Ok(())
    } else {
        Err(ValidationError::new("required"))
    }
}

/// Todo item as exposed by list and get endpoints.
#[derive(Debug, Serialize)]
pub struct TodoItemView {
    pub id: i64,
    pub activity_group_id: i64,
    pub title: String,
    pub is_active: bool,
    pub priority: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<TodoItem> for TodoItemView {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            activity_group_id: item.activity_group_id,
            title: item.title,
            is_active: item.is_active,
            priority: item.priority,
            created_at: item.created_at,
            updated_at: item.created_at,
        }
    }
}

/// Request body for `POST /todo-items`.
///
/// `priority` is not part of the contract: any value sent is ignored.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateTodoItemRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,

    /// Accepts `1` as well as `"1"`.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    #[validate(required, custom(function = "validate_non_zero"))]
    pub activity_group_id: Option<i64>,

    #[validate(required, custom(function = "validate_truthy"))]
    pub is_active: Option<Value>,
}

/// Validated fields of a todo item creation.
#[derive(Debug)]
pub struct NewTodoItemInput {
    pub activity_group_id: i64,
    pub title: String,
    /// Flag exactly as the caller sent it, echoed back in the response.
    pub is_active: Value,
}

impl CreateTodoItemRequest {
    /// Checks required fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming every missing or falsy field.
    pub fn into_input(self) -> Result<NewTodoItemInput, AppError> {
        self.validate()?;

        match (self.title, self.activity_group_id, self.is_active) {
            (Some(title), Some(activity_group_id), Some(is_active)) => Ok(NewTodoItemInput {
                activity_group_id,
                title,
                is_active,
            }),
            _ => Err(AppError::missing_fields([
                "title",
                "activity_group_id",
                "is_active",
            ])),
        }
    }
}

/// Request body for `PATCH /todo-items/{id}`.
///
/// All four fields are required. `status` is echoed back but not stored.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTodoItemRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,

    #[validate(required, length(min = 1))]
    pub priority: Option<String>,

    #[validate(required, custom(function = "validate_truthy"))]
    pub is_active: Option<Value>,

    #[validate(required, custom(function = "validate_truthy"))]
    pub status: Option<Value>,
}

/// Validated fields of a todo item update.
#[derive(Debug)]
pub struct TodoItemUpdateInput {
    pub title: String,
    pub priority: String,
    pub is_active: Value,
    pub status: Value,
}

impl UpdateTodoItemRequest {
    /// Checks required fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming every missing or falsy field.
    pub fn into_input(self) -> Result<TodoItemUpdateInput, AppError> {
        self.validate()?;

        match (self.title, self.priority, self.is_active, self.status) {
            (Some(title), Some(priority), Some(is_active), Some(status)) => {
                Ok(TodoItemUpdateInput {
                    title,
                    priority,
                    is_active,
                    status,
                })
            }
            _ => Err(AppError::missing_fields([
                "title",
                "priority",
                "is_active",
                "status",
            ])),
        }
    }
}

/// Response data for a created todo item.
///
/// The priority is exposed as `priorityParam` and is always the default.
#[derive(Debug, Serialize)]
pub struct CreatedTodoItem {
    pub id: i64,
    pub activity_group_id: i64,
    pub title: String,
    pub is_active: Value,
    #[serde(rename = "priorityParam")]
    pub priority: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Response data for an updated todo item.
#[derive(Debug, Serialize)]
pub struct UpdatedTodoItem {
    pub id: i64,
    pub title: String,
    pub priority: String,
    pub is_active: Value,
    pub status: Value,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
