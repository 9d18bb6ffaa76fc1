//! Project entity - container that issues may reference.

use crate::NewProject;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project groups issues. `created_by` is a free-text label, not a user reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a project from a validated draft.
    ///
    /// `fallback_created_by` is used when the draft carries no `created_by` label.
    pub fn new(draft: NewProject, fallback_created_by: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            created_by: draft
                .created_by
                .unwrap_or_else(|| fallback_created_by.to_string()),
            created_at: Utc::now().trunc_subsecs(0),
        }
    }
}
