mod issue;
mod issue_status;
mod project;
