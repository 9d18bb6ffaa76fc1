use serde::Serialize;

/// Flat tally of dashboard counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub open: i64,
    pub in_progress: i64,
    pub closed: i64,
    pub total_projects: i64,
    /// Projects with a due date at or after the evaluation instant
    pub upcoming_projects: i64,
    /// Projects with a due date before the evaluation instant
    pub past_due_projects: i64,
}
