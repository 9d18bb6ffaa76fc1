use tracker_core::{IssueColumn, ListQuery};

use serde::Deserialize;

/// Raw query string of GET /api/v1/issues. Every value is kept as text so a
/// bad value falls back instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListIssuesQuery {
    pub order_by: Option<String>,
    pub status: Option<String>,
    pub page: Option<String>,
}

impl ListIssuesQuery {
    pub fn to_list_query(&self) -> ListQuery<IssueColumn> {
        ListQuery::build(
            self.order_by.as_deref(),
            self.status.as_deref(),
            self.page.as_deref(),
        )
    }
}
