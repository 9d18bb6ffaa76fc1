use tracker_core::Project;

use chrono::SecondsFormat;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: Option<String>,
    pub created_by: String,
    pub created_at: String,
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.to_string(),
            title: project.title,
            description: project.description,
            due_date: project
                .due_date
                .map(|due| due.to_rfc3339_opts(SecondsFormat::Secs, true)),
            created_by: project.created_by,
            created_at: project.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
