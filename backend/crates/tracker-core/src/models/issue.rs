//! Issue entity - a trackable unit of work.

use crate::{IssueStatus, NewIssue, Priority};

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: Uuid,

    // Core fields
    pub title: String,
    pub description: String,

    // Workflow
    pub status: IssueStatus,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,

    // References (existence checked at write time, enforced by the store)
    pub assigned_to_user_id: Option<String>,
    pub project_id: Option<Uuid>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    /// Create an issue from a validated draft.
    /// Timestamps are truncated to whole seconds, the precision of the store.
    pub fn new(draft: NewIssue) -> Self {
        let now = Utc::now().trunc_subsecs(0);
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            due_date: draft.due_date,
            assigned_to_user_id: draft.assigned_to_user_id,
            project_id: draft.project_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.status == IssueStatus::Closed
    }
}
