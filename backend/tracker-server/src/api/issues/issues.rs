use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, DeleteResponse, IssueDto, ListIssuesQuery,
    ListResponse,
};

use tracker_core::{Issue, validate_issue_patch, validate_new_issue};
use tracker_db::{IssueRepository, ProjectRepository, UserRepository};

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{SubsecRound, Utc};
use log::info;
use serde_json::Value;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Confirm a referenced assignee exists
async fn ensure_assignee_exists(pool: &SqlitePool, user_id: Option<&str>) -> ApiResult<()> {
    if let Some(id) = user_id
        && !UserRepository::exists(pool, id).await?
    {
        return Err(ApiError::invalid_reference("Invalid assigned user."));
    }
    Ok(())
}

/// Confirm a referenced parent project exists
async fn ensure_project_exists(pool: &SqlitePool, project_id: Option<Uuid>) -> ApiResult<()> {
    if let Some(id) = project_id
        && !ProjectRepository::exists(pool, id).await?
    {
        return Err(ApiError::not_found("Project not found."));
    }
    Ok(())
}

/// POST /api/v1/issues - Create a new issue
pub async fn create_issue(
    State(state): State<AppState>,
    AuthenticatedUser(session): AuthenticatedUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<IssueDto>)> {
    let Json(body) = payload?;
    let draft = validate_new_issue(&body)?;

    ensure_assignee_exists(&state.pool, draft.assigned_to_user_id.as_deref()).await?;
    ensure_project_exists(&state.pool, draft.project_id).await?;

    let issue = Issue::new(draft);
    IssueRepository::create(&state.pool, &issue).await?;

    info!("{} created issue {}", session.user_id, issue.id);

    Ok((StatusCode::CREATED, Json(issue.into())))
}

/// GET /api/v1/issues - One page of issues
pub async fn list_issues(
    State(state): State<AppState>,
    Query(params): Query<ListIssuesQuery>,
) -> ApiResult<ListResponse<IssueDto>> {
    let query = params.to_list_query();

    let (issues, total) = tokio::try_join!(
        IssueRepository::find_many(&state.pool, &query),
        IssueRepository::count(&state.pool, query.status),
    )?;

    Ok(ListResponse {
        items: issues.into_iter().map(IssueDto::from).collect(),
        total,
    })
}

/// GET /api/v1/issues/{id}
pub async fn get_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<IssueDto>> {
    let issue_id = Uuid::parse_str(&id)?;

    let issue = IssueRepository::find_by_id(&state.pool, issue_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Issue {} not found", id)))?;

    Ok(Json(issue.into()))
}

/// PATCH /api/v1/issues/{id} - Merge the supplied fields over an issue
pub async fn update_issue(
    State(state): State<AppState>,
    AuthenticatedUser(session): AuthenticatedUser,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<IssueDto>> {
    let issue_id = Uuid::parse_str(&id)?;
    let Json(body) = payload?;

    let mut issue = IssueRepository::find_by_id(&state.pool, issue_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Issue {} not found", id)))?;

    let patch = validate_issue_patch(&body)?;

    ensure_assignee_exists(&state.pool, patch.assigned_user()).await?;
    ensure_project_exists(&state.pool, patch.project()).await?;

    patch.apply(&mut issue, Utc::now().trunc_subsecs(0));

    if !IssueRepository::update(&state.pool, &issue).await? {
        return Err(ApiError::not_found(format!("Issue {} not found", id)));
    }

    info!("{} updated issue {}", session.user_id, issue.id);

    Ok(Json(issue.into()))
}

/// DELETE /api/v1/issues/{id}
pub async fn delete_issue(
    State(state): State<AppState>,
    AuthenticatedUser(session): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let issue_id = Uuid::parse_str(&id)?;

    IssueRepository::find_by_id(&state.pool, issue_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Issue {} not found", id)))?;

    if !IssueRepository::delete(&state.pool, issue_id).await? {
        return Err(ApiError::not_found(format!("Issue {} not found", id)));
    }

    info!("{} deleted issue {}", session.user_id, issue_id);

    Ok(Json(DeleteResponse::new(
        issue_id,
        "Issue deleted successfully.",
    )))
}
