use crate::query::sort_column::declaration_rank;
use crate::{IssueStatus, Priority, SortColumn};

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueColumn {
    Title,
    Status,
    Priority,
    DueDate,
    CreatedAt,
}

impl SortColumn for IssueColumn {
    const FILTERS_BY_STATUS: bool = true;

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "title" => Some(Self::Title),
            "status" => Some(Self::Status),
            "priority" => Some(Self::Priority),
            "dueDate" => Some(Self::DueDate),
            "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    fn order_expression(self) -> Cow<'static, str> {
        match self {
            Self::Title => Cow::Borrowed("title"),
            Self::Status => Cow::Owned(declaration_rank(
                "status",
                IssueStatus::ALL.iter().map(IssueStatus::as_str),
            )),
            Self::Priority => Cow::Owned(declaration_rank(
                "priority",
                Priority::ALL.iter().map(Priority::as_str),
            )),
            Self::DueDate => Cow::Borrowed("due_date"),
            Self::CreatedAt => Cow::Borrowed("created_at"),
        }
    }
}
