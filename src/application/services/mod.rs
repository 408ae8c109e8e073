//! Business logic services for the application layer.

pub mod activity_group_service;
pub mod todo_item_service;

pub use activity_group_service::ActivityGroupService;
pub use todo_item_service::TodoItemService;
