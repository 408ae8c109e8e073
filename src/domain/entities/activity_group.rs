//! Domain entity representing an activity group.

use chrono::{DateTime, Utc};

/// A named group of todo items owned by an email address.
///
/// `created_at` is fixed at creation; updates only ever touch `title`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityGroup {
    pub id: i64,
    pub title: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl ActivityGroup {
    /// Creates a new ActivityGroup instance.
    pub fn new(id: i64, title: String, email: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            email,
            created_at,
        }
    }
}

/// Input data for inserting a new activity group.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivityGroup {
    pub title: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_group_creation() {
        let now = Utc::now();
        let group = ActivityGroup::new(
            1,
            "Sprint Planning".to_string(),
            "a@b.com".to_string(),
            now,
        );

        assert_eq!(group.id, 1);
        assert_eq!(group.title, "Sprint Planning");
        assert_eq!(group.email, "a@b.com");
        assert_eq!(group.created_at, now);
    }
}
