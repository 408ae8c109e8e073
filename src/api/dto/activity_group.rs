//! DTOs for activity group endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ActivityGroup;
use crate::error::AppError;

/// Activity group as exposed by the API.
///
/// There is no modification tracking, so `updatedAt` always repeats
/// `createdAt`.
#[derive(Debug, Serialize)]
pub struct ActivityGroupItem {
    pub id: i64,
    pub title: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<ActivityGroup> for ActivityGroupItem {
    fn from(group: ActivityGroup) -> Self {
        Self {
            id: group.id,
            title: group.title,
            email: group.email,
            created_at: group.created_at,
            updated_at: group.created_at,
        }
    }
}

/// Request body for `POST /activity-groups`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateActivityGroupRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,

    #[validate(required, length(min = 1))]
    pub email: Option<String>,
}

impl CreateActivityGroupRequest {
    /// Checks required fields and returns `(title, email)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming every missing or empty field.
    pub fn into_parts(self) -> Result<(String, String), AppError> {
        self.validate()?;

        match (self.title, self.email) {
            (Some(title), Some(email)) => Ok((title, email)),
            _ => Err(AppError::missing_fields(["title", "email"])),
        }
    }
}

/// Request body for `PATCH /activity-groups/{id}`.
///
/// Only the title can change; other fields in the body are ignored.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateActivityGroupRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
}

impl UpdateActivityGroupRequest {
    /// Checks the title and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title is missing or empty.
    pub fn into_title(self) -> Result<String, AppError> {
        self.validate()?;
        self.title.ok_or_else(|| AppError::missing_fields(["title"]))
    }
}
