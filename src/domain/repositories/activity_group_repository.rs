//! Repository trait for activity groups.

use crate::domain::entities::{ActivityGroup, NewActivityGroup};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `activities` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgActivityGroupRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_activity_group.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityGroupRepository: Send + Sync {
    /// Inserts a new activity group and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_group: NewActivityGroup) -> Result<ActivityGroup, AppError>;

    /// Finds an activity group by its primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ActivityGroup>, AppError>;

    /// Lists all activity groups ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<ActivityGroup>, AppError>;

    /// Replaces the title of an existing group in a single statement.
    ///
    /// Returns `None` when no row matched the id. `email` and `created_at`
    /// are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_title(&self, id: i64, title: String)
    -> Result<Option<ActivityGroup>, AppError>;

    /// Deletes a group by id. Returns `false` when no row matched.
    ///
    /// Todo items referencing the group are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
