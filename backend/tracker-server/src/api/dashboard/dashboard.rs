use crate::{ApiResult, AppState, DashboardDto, LatestIssueDto, ProjectDto};

use tracker_db::DashboardRepository;

use axum::{Json, extract::State};
use chrono::Utc;

/// GET /api/v1/dashboard - Issue and project tallies, evaluated now
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<Json<DashboardDto>> {
    let summary = DashboardRepository::summary(&state.pool, Utc::now()).await?;
    Ok(Json(summary.into()))
}

/// GET /api/v1/dashboard/latest-issues
pub async fn latest_issues(State(state): State<AppState>) -> ApiResult<Json<Vec<LatestIssueDto>>> {
    let issues = DashboardRepository::latest_issues(&state.pool).await?;
    Ok(Json(issues.into_iter().map(LatestIssueDto::from).collect()))
}

/// GET /api/v1/dashboard/latest-projects
pub async fn latest_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectDto>>> {
    let projects = DashboardRepository::latest_projects(&state.pool).await?;
    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}
