//! Validation of raw client payloads into typed drafts and patches.

pub mod due_date;
pub mod field_errors;
pub(crate) mod field_reader;
pub mod issue_patch;
pub mod issue_rules;
pub mod new_issue;
pub mod new_project;
pub mod project_patch;
pub mod project_rules;
pub mod validation_mode;

pub const MAX_TITLE_CHARS: usize = 255;
pub const MAX_DESCRIPTION_CHARS: usize = 65_535;
/// Limit for short identifier-like text (user ids, created-by labels)
pub const MAX_LABEL_CHARS: usize = 255;

/// Key used when the record itself is malformed rather than one of its fields
pub const RECORD_KEY: &str = "_record";
