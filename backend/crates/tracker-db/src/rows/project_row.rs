use crate::rows::{parse_optional_timestamp, parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use tracker_core::Project;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ProjectRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: Option<i64>,
    pub created_by: String,
    pub created_at: i64,
}

impl TryFrom<ProjectRow> for Project {
    type Error = DbError;

    fn try_from(r: ProjectRow) -> DbErrorResult<Self> {
        Ok(Project {
            id: parse_uuid("project.id", &r.id)?,
            title: r.title,
            description: r.description,
            due_date: parse_optional_timestamp("project.due_date", r.due_date)?,
            created_by: r.created_by,
            created_at: parse_timestamp("project.created_at", r.created_at)?,
        })
    }
}
