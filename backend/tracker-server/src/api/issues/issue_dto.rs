use tracker_core::{Issue, IssueStatus, Priority};

use chrono::SecondsFormat;
use serde::Serialize;

/// Issue as the web client sees it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub priority: Priority,
    pub due_date: Option<String>,
    pub assigned_to_user_id: Option<String>,
    pub project_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Issue> for IssueDto {
    fn from(issue: Issue) -> Self {
        Self {
            id: issue.id.to_string(),
            title: issue.title,
            description: issue.description,
            status: issue.status,
            priority: issue.priority,
            due_date: issue
                .due_date
                .map(|due| due.to_rfc3339_opts(SecondsFormat::Secs, true)),
            assigned_to_user_id: issue.assigned_to_user_id,
            project_id: issue.project_id.map(|id| id.to_string()),
            created_at: issue.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            updated_at: issue.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
