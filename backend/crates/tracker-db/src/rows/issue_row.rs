use crate::rows::{parse_optional_timestamp, parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use tracker_core::{Issue, IssueStatus, Priority};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct IssueRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub due_date: Option<i64>,
    pub assigned_to_user_id: Option<String>,
    pub project_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TryFrom<IssueRow> for Issue {
    type Error = DbError;

    fn try_from(r: IssueRow) -> DbErrorResult<Self> {
        Ok(Issue {
            id: parse_uuid("issue.id", &r.id)?,
            title: r.title,
            description: r.description,
            status: IssueStatus::from_str(&r.status).map_err(|e| DbError::Initialization {
                message: format!("Invalid IssueStatus in issue.status: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?,
            priority: Priority::from_str(&r.priority).map_err(|e| DbError::Initialization {
                message: format!("Invalid Priority in issue.priority: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?,
            due_date: parse_optional_timestamp("issue.due_date", r.due_date)?,
            assigned_to_user_id: r.assigned_to_user_id,
            project_id: r
                .project_id
                .as_deref()
                .map(|id| parse_uuid("issue.project_id", id))
                .transpose()?,
            created_at: parse_timestamp("issue.created_at", r.created_at)?,
            updated_at: parse_timestamp("issue.updated_at", r.updated_at)?,
        })
    }
}
