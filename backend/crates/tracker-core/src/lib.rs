pub mod error;
pub mod models;
pub mod query;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::dashboard_summary::DashboardSummary;
pub use models::issue::Issue;
pub use models::issue_status::IssueStatus;
pub use models::issue_with_assignee::IssueWithAssignee;
pub use models::priority::Priority;
pub use models::project::Project;
pub use models::user::User;
pub use query::issue_column::IssueColumn;
pub use query::list_query::ListQuery;
pub use query::page::{PAGE_SIZE, Page};
pub use query::project_column::ProjectColumn;
pub use query::sort_column::SortColumn;
pub use validation::due_date::parse_due_date;
pub use validation::field_errors::FieldErrors;
pub use validation::issue_patch::IssuePatch;
pub use validation::issue_rules::{validate_issue_patch, validate_new_issue};
pub use validation::new_issue::NewIssue;
pub use validation::new_project::NewProject;
pub use validation::project_patch::ProjectPatch;
pub use validation::project_rules::{validate_new_project, validate_project_patch};
pub use validation::validation_mode::ValidationMode;
pub use validation::{MAX_DESCRIPTION_CHARS, MAX_LABEL_CHARS, MAX_TITLE_CHARS};
