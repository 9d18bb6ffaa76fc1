use tracker_core::{Issue, IssueStatus, NewIssue, NewProject, Priority, Project};

use chrono::{DateTime, Duration, SubsecRound, Utc};
use uuid::Uuid;

/// Creates a test Issue with sensible defaults
pub fn create_test_issue(title: &str) -> Issue {
    Issue::new(NewIssue {
        title: title.to_string(),
        description: "Test issue description".to_string(),
        status: IssueStatus::Open,
        priority: Priority::Medium,
        due_date: None,
        assigned_to_user_id: None,
        project_id: None,
    })
}

pub fn create_test_issue_with_status(title: &str, status: IssueStatus) -> Issue {
    let mut issue = create_test_issue(title);
    issue.status = status;
    issue
}

/// Issue created `age` before now, for ordering tests
pub fn create_aged_issue(title: &str, age: Duration) -> Issue {
    let mut issue = create_test_issue(title);
    issue.created_at = issue.created_at - age;
    issue.updated_at = issue.created_at;
    issue
}

/// Creates a test Project with sensible defaults
pub fn create_test_project(title: &str) -> Project {
    Project::new(
        NewProject {
            title: title.to_string(),
            description: "Test project description".to_string(),
            due_date: None,
            created_by: Some("Test User".to_string()),
        },
        "unused",
    )
}

pub fn create_test_project_due(title: &str, due_date: DateTime<Utc>) -> Project {
    let mut project = create_test_project(title);
    project.due_date = Some(due_date.trunc_subsecs(0));
    project
}

pub fn unknown_id() -> Uuid {
    Uuid::new_v4()
}
