//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ActivityGroupRepository`] - Activity group CRUD
//! - [`TodoItemRepository`] - Todo item CRUD

pub mod activity_group_repository;
pub mod todo_item_repository;

pub use activity_group_repository::ActivityGroupRepository;
pub use todo_item_repository::TodoItemRepository;

#[cfg(test)]
pub use activity_group_repository::MockActivityGroupRepository;
#[cfg(test)]
pub use todo_item_repository::MockTodoItemRepository;
