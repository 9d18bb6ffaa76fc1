pub mod dashboard_repository;
pub mod issue_repository;
pub mod project_repository;
pub mod user_repository;
