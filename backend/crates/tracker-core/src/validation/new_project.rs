use chrono::{DateTime, Utc};

/// A validated project ready to be created.
///
/// `created_by` is optional on input; the caller fills it from the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
}
