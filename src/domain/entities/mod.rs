//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`ActivityGroup`] - A named group owned by an email address
//! - [`TodoItem`] - A todo entry attached to an activity group
//!
//! # Design Pattern
//!
//! Entities keep separate structs for writes:
//! - `NewActivityGroup`, `NewTodoItem` - For inserting new rows
//! - `TodoItemPatch` - For the todo item update

pub mod activity_group;
pub mod todo_item;

pub use activity_group::{ActivityGroup, NewActivityGroup};
pub use todo_item::{DEFAULT_PRIORITY, NewTodoItem, TodoItem, TodoItemPatch};
