//! Activity group management service.

use crate::domain::entities::{ActivityGroup, NewActivityGroup};
use crate::domain::repositories::ActivityGroupRepository;
use crate::error::AppError;
use crate::utils::timestamp::current_timestamp;
use std::sync::Arc;

/// Service for the activity group lifecycle.
///
/// Turns empty results into [`AppError::NotFound`] with the messages the API
/// exposes, and stamps `created_at` on creation.
pub struct ActivityGroupService {
    repository: Arc<dyn ActivityGroupRepository>,
}

impl ActivityGroupService {
    /// Creates a new activity group service.
    pub fn new(repository: Arc<dyn ActivityGroupRepository>) -> Self {
        Self { repository }
    }

    /// Lists every activity group ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the table is empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_activity_groups(&self) -> Result<Vec<ActivityGroup>, AppError> {
        let groups = self.repository.list().await?;

        if groups.is_empty() {
            return Err(AppError::not_found("No data found"));
        }

        Ok(groups)
    }

    /// Retrieves an activity group by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no group has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_activity_group(&self, id: i64) -> Result<ActivityGroup, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("No data found"))
    }

    /// Creates an activity group stamped with the current time.
    ///
    /// Presence of `title` and `email` is checked by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_activity_group(
        &self,
        title: String,
        email: String,
    ) -> Result<ActivityGroup, AppError> {
        let new_group = NewActivityGroup {
            title,
            email,
            created_at: current_timestamp(),
        };

        let created = self.repository.create(new_group).await?;
        tracing::debug!(id = created.id, "Activity group created");

        Ok(created)
    }

    /// Changes the title of an activity group, leaving `email` and
    /// `created_at` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpdateTargetMissing`] if no group has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_title(&self, id: i64, title: String) -> Result<ActivityGroup, AppError> {
        self.repository
            .update_title(id, title)
            .await?
            .ok_or_else(|| AppError::update_target_missing("Activity group not found."))
    }

    /// Deletes an activity group. Its todo items are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no group has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_activity_group(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found(format!(
                "Activity group with ID {} Not Found",
                id
            )));
        }

        Ok(())
    }
}
