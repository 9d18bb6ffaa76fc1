pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod sessions;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    dashboard::{
        dashboard::{get_dashboard, latest_issues, latest_projects},
        dashboard_dto::DashboardDto,
        latest_issue_dto::LatestIssueDto,
    },
    delete_response::DeleteResponse,
    error::{ApiError, Result as ApiResult},
    extractors::authenticated_user::AuthenticatedUser,
    issues::{
        issue_dto::IssueDto,
        issues::{create_issue, delete_issue, get_issue, list_issues, update_issue},
        list_issues_query::ListIssuesQuery,
    },
    list_response::{TOTAL_COUNT_HEADER, ListResponse},
    projects::{
        list_projects_query::ListProjectsQuery,
        project_dto::ProjectDto,
        projects::{create_project, delete_project, get_project, list_projects, update_project},
    },
    users::{user_dto::UserDto, users::list_users},
};

pub use crate::routes::build_router;
pub use crate::sessions::build_session_resolver;
pub use crate::state::AppState;
