//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::activity_group_service::ActivityGroupService`] - Activity group lifecycle
//! - [`services::todo_item_service::TodoItemService`] - Todo item lifecycle and default priority

pub mod services;
