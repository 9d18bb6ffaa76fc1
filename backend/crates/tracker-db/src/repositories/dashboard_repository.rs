//! Read-only aggregate queries backing the dashboard.
//!
//! Counts run concurrently and are not taken from a single snapshot, so a
//! write landing mid-aggregation may be reflected in some counts only.

use crate::{IssueRepository, ProjectRepository, Result as DbErrorResult};

use tracker_core::{DashboardSummary, IssueStatus, IssueWithAssignee, Project};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Number of records in each "latest" list
pub const LATEST_LIMIT: i64 = 5;

pub struct DashboardRepository;

impl DashboardRepository {
    pub async fn summary(pool: &SqlitePool, now: DateTime<Utc>) -> DbErrorResult<DashboardSummary> {
        let (open, in_progress, closed, total_projects, upcoming_projects, past_due_projects) = tokio::try_join!(
            IssueRepository::count_by_status(pool, IssueStatus::Open),
            IssueRepository::count_by_status(pool, IssueStatus::InProgress),
            IssueRepository::count_by_status(pool, IssueStatus::Closed),
            ProjectRepository::count(pool),
            ProjectRepository::count_due_from(pool, now),
            ProjectRepository::count_due_before(pool, now),
        )?;

        Ok(DashboardSummary {
            open,
            in_progress,
            closed,
            total_projects,
            upcoming_projects,
            past_due_projects,
        })
    }

    pub async fn latest_issues(pool: &SqlitePool) -> DbErrorResult<Vec<IssueWithAssignee>> {
        IssueRepository::find_latest_with_assignee(pool, LATEST_LIMIT).await
    }

    pub async fn latest_projects(pool: &SqlitePool) -> DbErrorResult<Vec<Project>> {
        ProjectRepository::find_latest(pool, LATEST_LIMIT).await
    }
}
