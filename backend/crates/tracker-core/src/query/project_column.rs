use crate::SortColumn;

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectColumn {
    Title,
    Description,
    CreatedAt,
    DueDate,
}

impl SortColumn for ProjectColumn {
    const FILTERS_BY_STATUS: bool = false;

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "title" => Some(Self::Title),
            "description" => Some(Self::Description),
            "createdAt" => Some(Self::CreatedAt),
            "dueDate" => Some(Self::DueDate),
            _ => None,
        }
    }

    fn order_expression(self) -> Cow<'static, str> {
        let column = match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::CreatedAt => "created_at",
            Self::DueDate => "due_date",
        };
        Cow::Borrowed(column)
    }
}
