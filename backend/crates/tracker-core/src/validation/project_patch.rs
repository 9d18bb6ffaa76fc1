use crate::Project;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub created_by: Option<String>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(due_date) = self.due_date {
            project.due_date = due_date;
        }
        if let Some(created_by) = self.created_by {
            project.created_by = created_by;
        }
    }
}
