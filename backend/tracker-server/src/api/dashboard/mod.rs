#[allow(clippy::module_inception)]
pub mod dashboard;
pub mod dashboard_dto;
pub mod latest_issue_dto;
