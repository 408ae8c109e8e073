//! Domain entity representing a todo item.

use chrono::{DateTime, Utc};

/// Priority assigned to every newly created todo item.
///
/// Caller-supplied priorities are ignored on create; only updates may change it.
pub const DEFAULT_PRIORITY: &str = "very-high";

/// A single todo item belonging (loosely) to an activity group.
///
/// `activity_group_id` is not enforced as a foreign key, and deleting the
/// group does not remove its items.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: i64,
    pub activity_group_id: i64,
    pub title: String,
    pub is_active: bool,
    pub priority: String,
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Creates a new TodoItem instance.
    pub fn new(
        id: i64,
        activity_group_id: i64,
        title: String,
        is_active: bool,
        priority: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            activity_group_id,
            title,
            is_active,
            priority,
            created_at,
        }
    }
}

/// Input data for inserting a new todo item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTodoItem {
    pub activity_group_id: i64,
    pub title: String,
    pub is_active: bool,
    pub priority: String,
    pub created_at: DateTime<Utc>,
}

/// Columns rewritten by a todo item update.
///
/// `created_at` is deliberately absent: it never changes after insert.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItemPatch {
    pub title: String,
    pub priority: String,
    pub is_active: bool,
}
