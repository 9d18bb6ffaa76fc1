use crate::validation::field_reader::{ChoiceRule, FieldReader, TextRule};
use crate::{
    FieldErrors, IssuePatch, IssueStatus, MAX_DESCRIPTION_CHARS, MAX_LABEL_CHARS,
    MAX_TITLE_CHARS, NewIssue, Priority, ValidationMode,
};

use serde_json::Value;

const TITLE: TextRule = TextRule {
    field: "title",
    label: "Title",
    required_on_create: true,
    max_chars: MAX_TITLE_CHARS,
};

const DESCRIPTION: TextRule = TextRule {
    field: "description",
    label: "Description",
    required_on_create: true,
    max_chars: MAX_DESCRIPTION_CHARS,
};

const ASSIGNED_TO_USER_ID: TextRule = TextRule {
    field: "assignedToUserId",
    label: "Assigned user",
    required_on_create: false,
    max_chars: MAX_LABEL_CHARS,
};

const STATUS: ChoiceRule = ChoiceRule {
    field: "status",
    label: "Status",
    required_on_create: true,
    allowed: &["OPEN", "IN_PROGRESS", "CLOSED"],
};

const PRIORITY: ChoiceRule = ChoiceRule {
    field: "priority",
    label: "Priority",
    required_on_create: true,
    allowed: &["LOW", "MEDIUM", "HIGH"],
};

const DUE_DATE: &str = "dueDate";
const PROJECT_ID: &str = "projectId";

/// Validate a create payload. Every failing field is reported at once.
pub fn validate_new_issue(record: &Value) -> Result<NewIssue, FieldErrors> {
    let mut reader = FieldReader::new(record, ValidationMode::Create)?;

    let title = reader.text(&TITLE);
    let description = reader.text(&DESCRIPTION);
    let status = reader.choice::<IssueStatus>(&STATUS);
    let priority = reader.choice::<Priority>(&PRIORITY);
    let due_date = reader.date(DUE_DATE);
    let assigned_to_user_id = reader.nullable_text(&ASSIGNED_TO_USER_ID);
    let project_id = reader.uuid(PROJECT_ID, "Project");

    let errors = reader.into_errors();
    match (title, description, status, priority) {
        (Some(title), Some(description), Some(status), Some(priority)) if errors.is_empty() => {
            Ok(NewIssue {
                title,
                description,
                status,
                priority,
                due_date: due_date.flatten(),
                assigned_to_user_id: assigned_to_user_id.flatten(),
                project_id: project_id.flatten(),
            })
        }
        _ => Err(errors),
    }
}

/// Validate a patch payload. Only present fields are checked.
pub fn validate_issue_patch(record: &Value) -> Result<IssuePatch, FieldErrors> {
    let mut reader = FieldReader::new(record, ValidationMode::Patch)?;

    let patch = IssuePatch {
        title: reader.text(&TITLE),
        description: reader.text(&DESCRIPTION),
        status: reader.choice(&STATUS),
        priority: reader.choice(&PRIORITY),
        due_date: reader.date(DUE_DATE),
        assigned_to_user_id: reader.nullable_text(&ASSIGNED_TO_USER_ID),
        project_id: reader.uuid(PROJECT_ID, "Project"),
    };

    let errors = reader.into_errors();
    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors)
    }
}
