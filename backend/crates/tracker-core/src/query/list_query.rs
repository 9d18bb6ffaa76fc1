use crate::{IssueStatus, Page, SortColumn};

use std::str::FromStr;

/// A list query built from raw parameters.
///
/// Unknown sort keys fall back to store order and unknown status filters are
/// dropped. Neither is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery<C: SortColumn> {
    /// Ascending order by this column when set
    pub order_by: Option<C>,
    pub status: Option<IssueStatus>,
    pub page: Page,
}

impl<C: SortColumn> ListQuery<C> {
    pub fn build(sort_key: Option<&str>, status_key: Option<&str>, page: Option<&str>) -> Self {
        let status = if C::FILTERS_BY_STATUS {
            status_key.and_then(|key| IssueStatus::from_str(key).ok())
        } else {
            None
        };

        Self {
            order_by: sort_key.and_then(C::from_key),
            status,
            page: Page::parse(page),
        }
    }

    pub fn skip(&self) -> i64 {
        self.page.skip()
    }

    pub fn take(&self) -> i64 {
        self.page.take()
    }
}

impl<C: SortColumn> Default for ListQuery<C> {
    fn default() -> Self {
        Self {
            order_by: None,
            status: None,
            page: Page::FIRST,
        }
    }
}
