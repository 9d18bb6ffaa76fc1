use crate::validation::field_reader::{FieldReader, TextRule};
use crate::{
    FieldErrors, MAX_DESCRIPTION_CHARS, MAX_LABEL_CHARS, MAX_TITLE_CHARS, NewProject,
    ProjectPatch, ValidationMode,
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

const CREATED_BY: TextRule = TextRule {
    field: "createdBy",
    label: "Created by",
    required_on_create: false,
    max_chars: MAX_LABEL_CHARS,
};

const DUE_DATE: &str = "dueDate";

pub fn validate_new_project(record: &Value) -> Result<NewProject, FieldErrors> {
    let mut reader = FieldReader::new(record, ValidationMode::Create)?;

    let title = reader.text(&TITLE);
    let description = reader.text(&DESCRIPTION);
    let due_date = reader.date(DUE_DATE);
    // null behaves like absent on create
    let created_by = reader.nullable_text(&CREATED_BY);

    let errors = reader.into_errors();
    match (title, description) {
        (Some(title), Some(description)) if errors.is_empty() => Ok(NewProject {
            title,
            description,
            due_date: due_date.flatten(),
            created_by: created_by.flatten(),
        }),
        _ => Err(errors),
    }
}

pub fn validate_project_patch(record: &Value) -> Result<ProjectPatch, FieldErrors> {
    let mut reader = FieldReader::new(record, ValidationMode::Patch)?;

    let patch = ProjectPatch {
        title: reader.text(&TITLE),
        description: reader.text(&DESCRIPTION),
        due_date: reader.date(DUE_DATE),
        created_by: reader.text(&CREATED_BY),
    };

    let errors = reader.into_errors();
    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors)
    }
}
