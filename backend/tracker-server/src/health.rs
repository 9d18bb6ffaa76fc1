use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use sqlx::SqlitePool;

async fn database_reachable(pool: &SqlitePool) -> bool {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => true,
        Err(e) => {
            log::error!("Database health check failed: {}", e);
            false
        }
    }
}

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = if database_reachable(&state.pool).await {
        "operational"
    } else {
        "unavailable"
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "auth": state.sessions.scheme(),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe; fails while the store is unreachable
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if database_reachable(&state.pool).await {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
    }
}
