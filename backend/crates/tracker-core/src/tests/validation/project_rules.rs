use crate::{validate_new_project, validate_project_patch};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_project_without_creator_when_created_then_creator_left_empty() {
    let project = validate_new_project(&json!({
        "title": "Mobile app",
        "description": "iOS first"
    }))
    .unwrap();

    assert_that!(project.title, eq("Mobile app"));
    assert_that!(project.created_by, none());
    assert_that!(project.due_date, none());
}

#[test]
fn given_project_with_empty_creator_when_created_then_rejected() {
    let errors = validate_new_project(&json!({
        "title": "Mobile app",
        "description": "iOS first",
        "createdBy": ""
    }))
    .unwrap_err();

    assert_that!(errors.contains("createdBy"), eq(true));
}

#[test]
fn given_project_with_whitespace_creator_when_created_then_accepted() {
    let project = validate_new_project(&json!({
        "title": "Mobile app",
        "description": "iOS first",
        "createdBy": " "
    }))
    .unwrap();

    assert_that!(project.created_by, some(eq(" ")));
}

#[test]
fn given_project_missing_description_when_created_then_rejected() {
    let errors = validate_new_project(&json!({ "title": "Mobile app" })).unwrap_err();

    assert_eq!(errors.messages("description"), ["Description is required."]);
}

#[test]
fn given_project_patch_with_null_due_date_when_validated_then_clears() {
    let patch = validate_project_patch(&json!({ "dueDate": null })).unwrap();

    assert_eq!(patch.due_date, Some(None));
    assert_that!(patch.is_empty(), eq(false));
}

#[test]
fn given_project_patch_with_null_creator_when_validated_then_rejected() {
    let errors = validate_project_patch(&json!({ "createdBy": null })).unwrap_err();

    assert_that!(errors.contains("createdBy"), eq(true));
}

#[test]
fn given_string_body_when_created_then_record_error() {
    let errors = validate_new_project(&json!("hello")).unwrap_err();

    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["_record"]);
    assert_that!(errors.to_string(), contains_substring("JSON object"));
}
