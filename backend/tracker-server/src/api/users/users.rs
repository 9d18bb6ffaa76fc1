use crate::{ApiResult, AppState, UserDto};

use tracker_db::UserRepository;

use axum::{Json, extract::State};

/// GET /api/v1/users - Team list, ordered by name
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let users = UserRepository::find_all(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}
