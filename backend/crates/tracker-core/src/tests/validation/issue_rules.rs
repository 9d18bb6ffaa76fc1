use crate::{IssueStatus, MAX_TITLE_CHARS, Priority, validate_issue_patch, validate_new_issue};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;
use proptest::prelude::*;
use serde_json::{Value, json};
use uuid::Uuid;

fn valid_issue() -> Value {
    json!({
        "title": "Checkout fails",
        "description": "500 on submit",
        "status": "OPEN",
        "priority": "HIGH"
    })
}

#[test]
fn given_complete_record_when_validated_then_normalized() {
    // Given
    let mut record = valid_issue();
    record["dueDate"] = json!("2030-01-31");
    record["assignedToUserId"] = json!("user-7");

    // When
    let issue = validate_new_issue(&record).unwrap();

    // Then
    assert_that!(issue.title, eq("Checkout fails"));
    assert_that!(issue.status, eq(IssueStatus::Open));
    assert_that!(issue.priority, eq(Priority::High));
    assert_that!(
        issue.due_date,
        some(eq(Utc.with_ymd_and_hms(2030, 1, 31, 0, 0, 0).unwrap()))
    );
    assert_that!(issue.assigned_to_user_id.as_deref(), some(eq("user-7")));
    assert_that!(issue.project_id, none());
}

#[test]
fn given_empty_record_when_created_then_all_required_fields_reported() {
    let errors = validate_new_issue(&json!({})).unwrap_err();

    assert_that!(errors.len(), eq(4));
    for field in ["title", "description", "status", "priority"] {
        assert_that!(errors.contains(field), eq(true));
    }
    assert_eq!(errors.messages("title"), ["Title is required."]);
}

#[test]
fn given_empty_title_when_created_then_rejected() {
    let mut record = valid_issue();
    record["title"] = json!("");

    let errors = validate_new_issue(&record).unwrap_err();

    assert_eq!(errors.messages("title"), ["Title is required."]);
}

#[test]
fn given_whitespace_title_when_created_then_kept_verbatim() {
    let mut record = valid_issue();
    record["title"] = json!("   ");

    let issue = validate_new_issue(&record).unwrap();

    assert_eq!(issue.title, "   ");
}

#[test]
fn given_title_over_limit_when_created_then_rejected() {
    let mut record = valid_issue();
    record["title"] = json!("x".repeat(MAX_TITLE_CHARS + 1));

    let errors = validate_new_issue(&record).unwrap_err();

    assert_that!(errors.messages("title")[0], contains_substring("at most 255"));
}

#[test]
fn given_title_at_limit_in_multibyte_chars_when_created_then_accepted() {
    let mut record = valid_issue();
    record["title"] = json!("é".repeat(MAX_TITLE_CHARS));

    assert_that!(validate_new_issue(&record), ok(anything()));
}

#[test]
fn given_non_string_description_when_created_then_type_error() {
    let mut record = valid_issue();
    record["description"] = json!(42);

    let errors = validate_new_issue(&record).unwrap_err();

    assert_eq!(errors.messages("description"), ["Description must be a string."]);
}

#[test]
fn given_lowercase_status_when_created_then_rejected() {
    let mut record = valid_issue();
    record["status"] = json!("open");

    let errors = validate_new_issue(&record).unwrap_err();

    assert_that!(
        errors.messages("status")[0],
        contains_substring("OPEN, IN_PROGRESS, CLOSED")
    );
}

#[test]
fn given_invalid_due_date_when_created_then_rejected() {
    let mut record = valid_issue();
    record["dueDate"] = json!("someday");

    let errors = validate_new_issue(&record).unwrap_err();

    assert_eq!(errors.messages("dueDate"), ["Invalid date format."]);
}

#[test]
fn given_null_optional_fields_when_created_then_treated_as_absent() {
    let mut record = valid_issue();
    record["dueDate"] = Value::Null;
    record["assignedToUserId"] = Value::Null;
    record["projectId"] = Value::Null;

    let issue = validate_new_issue(&record).unwrap();

    assert_that!(issue.due_date, none());
    assert_that!(issue.assigned_to_user_id, none());
    assert_that!(issue.project_id, none());
}

#[test]
fn given_malformed_project_id_when_created_then_rejected() {
    let mut record = valid_issue();
    record["projectId"] = json!("42");

    let errors = validate_new_issue(&record).unwrap_err();

    assert_that!(errors.contains("projectId"), eq(true));
}

#[test]
fn given_unknown_fields_when_created_then_ignored() {
    let mut record = valid_issue();
    record["id"] = json!("attacker-chosen");
    record["createdAt"] = json!("1999-01-01");

    assert_that!(validate_new_issue(&record), ok(anything()));
}

#[test]
fn given_array_body_when_created_then_record_error() {
    let errors = validate_new_issue(&json!(["title"])).unwrap_err();

    assert_that!(errors.contains("_record"), eq(true));
}

#[test]
fn given_empty_patch_when_validated_then_empty() {
    let patch = validate_issue_patch(&json!({})).unwrap();

    assert_that!(patch.is_empty(), eq(true));
}

#[test]
fn given_patch_with_nulls_when_validated_then_clears() {
    let patch = validate_issue_patch(&json!({
        "assignedToUserId": null,
        "dueDate": null,
        "projectId": null
    }))
    .unwrap();

    assert_eq!(patch.assigned_to_user_id, Some(None));
    assert_eq!(patch.due_date, Some(None));
    assert_eq!(patch.project_id, Some(None));
}

#[test]
fn given_patch_with_null_title_when_validated_then_rejected() {
    let errors = validate_issue_patch(&json!({ "title": null })).unwrap_err();

    assert_eq!(errors.messages("title"), ["Title must be a string."]);
}

#[test]
fn given_patch_with_status_only_when_validated_then_only_status_set() {
    let project_id = Uuid::new_v4();
    let patch = validate_issue_patch(&json!({
        "status": "IN_PROGRESS",
        "projectId": project_id.to_string()
    }))
    .unwrap();

    assert_that!(patch.status, some(eq(IssueStatus::InProgress)));
    assert_that!(patch.project(), some(eq(project_id)));
    assert_that!(patch.title, none());
    assert_that!(patch.priority, none());
}

fn status_strategy() -> impl Strategy<Value = IssueStatus> {
    prop::sample::select(IssueStatus::ALL.to_vec())
}

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop::sample::select(Priority::ALL.to_vec())
}

proptest! {
    #[test]
    fn valid_records_normalize_to_their_input(
        title in "[A-Za-z0-9][A-Za-z0-9 ]{0,60}",
        description in "[A-Za-z0-9][A-Za-z0-9 .,]{0,200}",
        status in status_strategy(),
        priority in priority_strategy(),
        (year, month, day) in (2000i32..2100, 1u32..=12, 1u32..=28),
    ) {
        let record = json!({
            "title": title.as_str(),
            "description": description.as_str(),
            "status": status.as_str(),
            "priority": priority.as_str(),
            "dueDate": format!("{year:04}-{month:02}-{day:02}"),
        });

        let issue = validate_new_issue(&record).unwrap();

        prop_assert_eq!(issue.title, title);
        prop_assert_eq!(issue.description, description);
        prop_assert_eq!(issue.status, status);
        prop_assert_eq!(issue.priority, priority);
        prop_assert_eq!(
            issue.due_date,
            Some(Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn records_missing_required_fields_are_rejected(mask in 0u8..15) {
        let mut record = valid_issue();
        let fields = ["title", "description", "status", "priority"];
        for (bit, field) in fields.iter().enumerate() {
            if mask & (1 << bit) == 0 {
                record.as_object_mut().unwrap().remove(*field);
            }
        }

        let errors = validate_new_issue(&record).unwrap_err();

        for (bit, field) in fields.iter().enumerate() {
            prop_assert_eq!(errors.contains(field), mask & (1 << bit) == 0);
        }
    }
}
