use crate::rows::issue_row::IssueRow;
use crate::{DbError, Result as DbErrorResult};

use tracker_core::{Issue, IssueWithAssignee, User};

/// Issue columns plus the left-joined assignee
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct LatestIssueRow {
    #[sqlx(flatten)]
    pub issue: IssueRow,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_image: Option<String>,
}

impl TryFrom<LatestIssueRow> for IssueWithAssignee {
    type Error = DbError;

    fn try_from(r: LatestIssueRow) -> DbErrorResult<Self> {
        let assigned_to_user = r.user_id.map(|id| User {
            id,
            name: r.user_name,
            email: r.user_email,
            image: r.user_image,
        });

        Ok(IssueWithAssignee {
            issue: Issue::try_from(r.issue)?,
            assigned_to_user,
        })
    }
}
