//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod activity_groups;
pub mod todo_items;

pub use activity_groups::{
    create_activity_group_handler, delete_activity_group_handler, get_activity_group_handler,
    list_activity_groups_handler, update_activity_group_handler,
};
pub use todo_items::{
    create_todo_item_handler, delete_todo_item_handler, get_todo_item_handler,
    list_todo_items_handler, update_todo_item_handler,
};
