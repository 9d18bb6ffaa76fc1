use crate::{
    AppState, TOTAL_COUNT_HEADER, create_issue, create_project, delete_issue, delete_project,
    get_dashboard, get_issue, get_project, health, latest_issues, latest_projects, list_issues,
    list_projects, list_users, update_issue, update_project,
};

use axum::{Router, http::HeaderName, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Issues
        .route("/api/v1/issues", get(list_issues).post(create_issue))
        .route(
            "/api/v1/issues/{id}",
            get(get_issue).patch(update_issue).delete(delete_issue),
        )
        // Projects
        .route("/api/v1/projects", get(list_projects).post(create_project))
        .route(
            "/api/v1/projects/{id}",
            get(get_project).patch(update_project).delete(delete_project),
        )
        // Dashboard
        .route("/api/v1/dashboard", get(get_dashboard))
        .route("/api/v1/dashboard/latest-issues", get(latest_issues))
        .route("/api/v1/dashboard/latest-projects", get(latest_projects))
        // Team
        .route("/api/v1/users", get(list_users))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
                .expose_headers([HeaderName::from_static(TOTAL_COUNT_HEADER)]),
        )
}
