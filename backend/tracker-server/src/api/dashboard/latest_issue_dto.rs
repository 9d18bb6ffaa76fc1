use crate::{IssueDto, UserDto};

use tracker_core::IssueWithAssignee;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestIssueDto {
    #[serde(flatten)]
    pub issue: IssueDto,
    pub assigned_to_user: Option<UserDto>,
}

impl From<IssueWithAssignee> for LatestIssueDto {
    fn from(latest: IssueWithAssignee) -> Self {
        Self {
            issue: latest.issue.into(),
            assigned_to_user: latest.assigned_to_user.map(UserDto::from),
        }
    }
}
