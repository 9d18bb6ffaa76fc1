pub mod dashboard_summary;
pub mod issue;
pub mod issue_with_assignee;
pub mod issue_status;
pub mod priority;
pub mod project;
pub mod user;
