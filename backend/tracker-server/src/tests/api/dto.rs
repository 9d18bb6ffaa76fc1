use crate::{DashboardDto, IssueDto, LatestIssueDto, UserDto};

use tracker_core::{
    DashboardSummary, Issue, IssueStatus, IssueWithAssignee, NewIssue, Priority, User,
    parse_due_date,
};

use uuid::Uuid;

fn sample_issue() -> Issue {
    Issue::new(NewIssue {
        title: "Broken login".into(),
        description: "Users cannot log in".into(),
        status: IssueStatus::InProgress,
        priority: Priority::High,
        due_date: Some(parse_due_date("2030-01-01").unwrap()),
        assigned_to_user_id: Some("user-1".into()),
        project_id: Some(Uuid::nil()),
    })
}

#[test]
fn test_issue_dto_uses_camel_case_keys() {
    let json = serde_json::to_value(IssueDto::from(sample_issue())).unwrap();

    assert_eq!(json["status"], "IN_PROGRESS");
    assert_eq!(json["priority"], "HIGH");
    assert_eq!(json["dueDate"], "2030-01-01T00:00:00Z");
    assert_eq!(json["assignedToUserId"], "user-1");
    assert_eq!(json["projectId"], Uuid::nil().to_string());
    assert!(json.get("createdAt").is_some());
    assert!(json.get("updatedAt").is_some());
}

#[test]
fn test_issue_dto_serializes_missing_due_date_as_null() {
    let mut issue = sample_issue();
    issue.due_date = None;

    let json = serde_json::to_value(IssueDto::from(issue)).unwrap();

    assert!(json["dueDate"].is_null());
}

#[test]
fn test_latest_issue_dto_embeds_assignee() {
    let latest = IssueWithAssignee {
        issue: sample_issue(),
        assigned_to_user: Some(User {
            id: "user-1".into(),
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            image: None,
        }),
    };

    let json = serde_json::to_value(LatestIssueDto::from(latest)).unwrap();

    assert_eq!(json["title"], "Broken login");
    assert_eq!(json["assignedToUser"]["name"], "Ada");
}

#[test]
fn test_user_dto_keeps_optional_fields() {
    let json = serde_json::to_value(UserDto::from(User {
        id: "user-2".into(),
        name: None,
        email: None,
        image: None,
    }))
    .unwrap();

    assert_eq!(json["id"], "user-2");
    assert!(json["name"].is_null());
}

#[test]
fn test_dashboard_dto_uses_camel_case_keys() {
    let summary = DashboardSummary {
        open: 2,
        in_progress: 1,
        closed: 3,
        total_projects: 4,
        upcoming_projects: 2,
        past_due_projects: 1,
    };

    let json = serde_json::to_value(DashboardDto::from(summary)).unwrap();

    assert_eq!(json["open"], 2);
    assert_eq!(json["inProgress"], 1);
    assert_eq!(json["closed"], 3);
    assert_eq!(json["totalProjects"], 4);
    assert_eq!(json["upcomingProjects"], 2);
    assert_eq!(json["pastDueProjects"], 1);
}
