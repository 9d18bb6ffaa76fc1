use crate::{Issue, IssuePatch, IssueStatus, NewIssue, Priority};

use chrono::{Duration, Timelike, Utc};
use uuid::Uuid;

fn draft() -> NewIssue {
    NewIssue {
        title: "Broken login".to_string(),
        description: "Users cannot sign in".to_string(),
        status: IssueStatus::Open,
        priority: Priority::High,
        due_date: None,
        assigned_to_user_id: Some("user-1".to_string()),
        project_id: None,
    }
}

#[test]
fn test_issue_new() {
    let issue = Issue::new(draft());

    assert_eq!(issue.title, "Broken login");
    assert_eq!(issue.priority, Priority::High);
    assert_eq!(issue.assigned_to_user_id.as_deref(), Some("user-1"));
    assert_eq!(issue.created_at, issue.updated_at);
    assert_eq!(issue.created_at.nanosecond(), 0);
    assert!(!issue.is_closed());
}

#[test]
fn test_empty_patch_leaves_issue_untouched() {
    let mut issue = Issue::new(draft());
    let before = issue.clone();

    IssuePatch::default().apply(&mut issue, Utc::now() + Duration::hours(1));

    assert_eq!(issue, before);
}

#[test]
fn test_patch_updates_fields_and_timestamp() {
    let mut issue = Issue::new(draft());
    let later = issue.updated_at + Duration::minutes(5);
    let project_id = Uuid::new_v4();

    let patch = IssuePatch {
        status: Some(IssueStatus::Closed),
        assigned_to_user_id: Some(None),
        project_id: Some(Some(project_id)),
        ..Default::default()
    };
    patch.apply(&mut issue, later);

    assert!(issue.is_closed());
    assert_eq!(issue.assigned_to_user_id, None);
    assert_eq!(issue.project_id, Some(project_id));
    assert_eq!(issue.title, "Broken login");
    assert_eq!(issue.updated_at, later);
}

#[test]
fn test_patch_reference_accessors() {
    let patch = IssuePatch {
        assigned_to_user_id: Some(Some("user-2".to_string())),
        project_id: Some(None),
        ..Default::default()
    };

    assert_eq!(patch.assigned_user(), Some("user-2"));
    assert_eq!(patch.project(), None);
    assert!(!patch.is_empty());
}
