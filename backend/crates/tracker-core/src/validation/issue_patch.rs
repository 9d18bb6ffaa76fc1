use crate::{Issue, IssueStatus, Priority};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A validated partial update to an issue.
///
/// Outer `None` leaves a field untouched. For nullable fields `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<IssueStatus>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub assigned_to_user_id: Option<Option<String>>,
    pub project_id: Option<Option<Uuid>>,
}

impl IssuePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// User the patch assigns, if it sets one
    pub fn assigned_user(&self) -> Option<&str> {
        self.assigned_to_user_id
            .as_ref()
            .and_then(|user| user.as_deref())
    }

    /// Project the patch links, if it sets one
    pub fn project(&self) -> Option<Uuid> {
        self.project_id.flatten()
    }

    /// Apply to `issue`. `updated_at` only moves when the patch changes something.
    pub fn apply(self, issue: &mut Issue, now: DateTime<Utc>) {
        if self.is_empty() {
            return;
        }

        if let Some(title) = self.title {
            issue.title = title;
        }
        if let Some(description) = self.description {
            issue.description = description;
        }
        if let Some(status) = self.status {
            issue.status = status;
        }
        if let Some(priority) = self.priority {
            issue.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            issue.due_date = due_date;
        }
        if let Some(assigned_to_user_id) = self.assigned_to_user_id {
            issue.assigned_to_user_id = assigned_to_user_id;
        }
        if let Some(project_id) = self.project_id {
            issue.project_id = project_id;
        }

        issue.updated_at = now;
    }
}
