//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx
//! parameterized queries.
//!
//! # Repositories
//!
//! - [`PgActivityGroupRepository`] - `activities` table
//! - [`PgTodoItemRepository`] - `todos` table

pub mod pg_activity_group_repository;
pub mod pg_todo_item_repository;

pub use pg_activity_group_repository::PgActivityGroupRepository;
pub use pg_todo_item_repository::PgTodoItemRepository;
