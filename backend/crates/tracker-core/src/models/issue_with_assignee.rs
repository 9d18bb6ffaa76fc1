use crate::{Issue, User};

/// An issue together with its assigned user, when one is set and still exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueWithAssignee {
    pub issue: Issue,
    pub assigned_to_user: Option<User>,
}
