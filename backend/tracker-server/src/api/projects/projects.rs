use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, DeleteResponse, ListProjectsQuery,
    ListResponse, ProjectDto,
};

use tracker_core::{Project, validate_new_project, validate_project_patch};
use tracker_db::ProjectRepository;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use log::info;
use serde_json::Value;
use uuid::Uuid;

/// POST /api/v1/projects - Create a new project
pub async fn create_project(
    State(state): State<AppState>,
    AuthenticatedUser(session): AuthenticatedUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let Json(body) = payload?;
    let draft = validate_new_project(&body)?;

    let project = Project::new(draft, session.display_label());
    ProjectRepository::create(&state.pool, &project).await?;

    info!("{} created project {}", session.user_id, project.id);

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// GET /api/v1/projects - One page of projects
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ListProjectsQuery>,
) -> ApiResult<ListResponse<ProjectDto>> {
    let query = params.to_list_query();

    let (projects, total) = tokio::try_join!(
        ProjectRepository::find_many(&state.pool, &query),
        ProjectRepository::count(&state.pool),
    )?;

    Ok(ListResponse {
        items: projects.into_iter().map(ProjectDto::from).collect(),
        total,
    })
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectDto>> {
    let project_id = Uuid::parse_str(&id)?;

    let project = ProjectRepository::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", id)))?;

    Ok(Json(project.into()))
}

/// PATCH /api/v1/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    AuthenticatedUser(session): AuthenticatedUser,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ProjectDto>> {
    let project_id = Uuid::parse_str(&id)?;
    let Json(body) = payload?;

    let mut project = ProjectRepository::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", id)))?;

    let patch = validate_project_patch(&body)?;
    patch.apply(&mut project);

    if !ProjectRepository::update(&state.pool, &project).await? {
        return Err(ApiError::not_found(format!("Project {} not found", id)));
    }

    info!("{} updated project {}", session.user_id, project.id);

    Ok(Json(project.into()))
}

/// DELETE /api/v1/projects/{id}
///
/// Issues still pointing at the project block the delete with a `Conflict`.
pub async fn delete_project(
    State(state): State<AppState>,
    AuthenticatedUser(session): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    ProjectRepository::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", id)))?;

    let deleted = ProjectRepository::delete(&state.pool, project_id)
        .await
        .map_err(|e| {
            if e.is_foreign_key_violation() {
                ApiError::conflict("Project still has issues linked to it.")
            } else {
                ApiError::from(e)
            }
        })?;

    if !deleted {
        return Err(ApiError::not_found(format!("Project {} not found", id)));
    }

    info!("{} deleted project {}", session.user_id, project_id);

    Ok(Json(DeleteResponse::new(
        project_id,
        "Project deleted successfully.",
    )))
}
