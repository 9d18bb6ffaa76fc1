use tracker_core::{ListQuery, ProjectColumn};

use serde::Deserialize;

/// Raw query string of GET /api/v1/projects
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsQuery {
    pub order_by: Option<String>,
    pub page: Option<String>,
}

impl ListProjectsQuery {
    pub fn to_list_query(&self) -> ListQuery<ProjectColumn> {
        ListQuery::build(self.order_by.as_deref(), None, self.page.as_deref())
    }
}
