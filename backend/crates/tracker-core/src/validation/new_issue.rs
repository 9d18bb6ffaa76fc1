use crate::{IssueStatus, Priority};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A validated issue ready to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    pub assigned_to_user_id: Option<String>,
    pub project_id: Option<Uuid>,
}
