pub mod dashboard;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod issues;
pub mod list_response;
pub mod projects;
pub mod users;
