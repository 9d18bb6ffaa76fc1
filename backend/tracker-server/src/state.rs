use tracker_auth::SessionResolver;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state. The pool is the only shared resource between requests.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: Arc<SessionResolver>,
}

impl AppState {
    pub fn new(pool: SqlitePool, sessions: SessionResolver) -> Self {
        Self {
            pool,
            sessions: Arc::new(sessions),
        }
    }
}
