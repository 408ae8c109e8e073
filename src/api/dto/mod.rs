//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for required-field checks.

pub mod activity_group;
pub mod envelope;
pub mod list_query;
pub mod todo_item;
