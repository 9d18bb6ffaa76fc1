pub mod error;
pub mod repositories;
pub(crate) mod rows;

pub use error::{DbError, Result};
pub use repositories::dashboard_repository::{DashboardRepository, LATEST_LIMIT};
pub use repositories::issue_repository::IssueRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::user_repository::UserRepository;

/// Embedded schema migrations
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
