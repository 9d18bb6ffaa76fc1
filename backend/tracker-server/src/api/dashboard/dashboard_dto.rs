use tracker_core::DashboardSummary;

use serde::Serialize;

/// Flat tally shown on the dashboard cards
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub open: i64,
    pub in_progress: i64,
    pub closed: i64,
    pub total_projects: i64,
    pub upcoming_projects: i64,
    pub past_due_projects: i64,
}

impl From<DashboardSummary> for DashboardDto {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            open: summary.open,
            in_progress: summary.in_progress,
            closed: summary.closed,
            total_projects: summary.total_projects,
            upcoming_projects: summary.upcoming_projects,
            past_due_projects: summary.past_due_projects,
        }
    }
}
