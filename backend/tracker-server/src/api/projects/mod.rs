pub mod list_projects_query;
pub mod project_dto;
#[allow(clippy::module_inception)]
pub mod projects;
