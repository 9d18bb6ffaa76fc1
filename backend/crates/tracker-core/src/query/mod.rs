//! Translation of list query-string parameters into a bounded store query.

pub mod issue_column;
pub mod list_query;
pub mod page;
pub mod project_column;
pub mod sort_column;
