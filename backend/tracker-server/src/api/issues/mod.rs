pub mod issue_dto;
#[allow(clippy::module_inception)]
pub mod issues;
pub mod list_issues_query;
