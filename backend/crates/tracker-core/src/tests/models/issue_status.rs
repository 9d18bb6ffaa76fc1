use crate::IssueStatus;

use std::str::FromStr;

#[test]
fn test_issue_status_as_str() {
    assert_eq!(IssueStatus::Open.as_str(), "OPEN");
    assert_eq!(IssueStatus::InProgress.as_str(), "IN_PROGRESS");
    assert_eq!(IssueStatus::Closed.as_str(), "CLOSED");
}

#[test]
fn test_issue_status_from_str() {
    for status in IssueStatus::ALL {
        assert_eq!(IssueStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_issue_status_from_str_is_case_sensitive() {
    assert!(IssueStatus::from_str("open").is_err());
    assert!(IssueStatus::from_str("In_Progress").is_err());
    assert!(IssueStatus::from_str("").is_err());
}

#[test]
fn test_issue_status_default() {
    assert_eq!(IssueStatus::default(), IssueStatus::Open);
}

#[test]
fn test_issue_status_serializes_as_wire_value() {
    let json = serde_json::to_string(&IssueStatus::InProgress).unwrap();
    assert_eq!(json, "\"IN_PROGRESS\"");
}
