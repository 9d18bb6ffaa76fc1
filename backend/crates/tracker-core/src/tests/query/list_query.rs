use crate::{IssueColumn, IssueStatus, ListQuery, ProjectColumn, SortColumn};

use googletest::prelude::*;

#[test]
fn given_known_sort_key_when_built_then_orders_by_column() {
    let query = ListQuery::<IssueColumn>::build(Some("dueDate"), None, None);

    assert_that!(query.order_by, some(eq(IssueColumn::DueDate)));
    assert_that!(
        query.order_by.map(IssueColumn::order_expression),
        some(eq("due_date"))
    );
}

#[test]
fn given_priority_sort_when_built_then_ranked_low_to_high() {
    let expression = IssueColumn::Priority.order_expression();

    assert_eq!(
        expression,
        "CASE priority WHEN 'LOW' THEN 0 WHEN 'MEDIUM' THEN 1 WHEN 'HIGH' THEN 2 END"
    );
}

#[test]
fn given_status_sort_when_built_then_ranked_by_workflow() {
    let expression = IssueColumn::Status.order_expression();

    assert_eq!(
        expression,
        "CASE status WHEN 'OPEN' THEN 0 WHEN 'IN_PROGRESS' THEN 1 WHEN 'CLOSED' THEN 2 END"
    );
}

#[test]
fn given_unknown_sort_key_when_built_then_store_order() {
    let query = ListQuery::<IssueColumn>::build(Some("password; DROP TABLE issues"), None, None);

    assert_that!(query.order_by, none());
}

#[test]
fn given_sort_key_with_wrong_case_when_built_then_ignored() {
    let query = ListQuery::<ProjectColumn>::build(Some("CreatedAt"), None, None);

    assert_that!(query.order_by, none());
}

#[test]
fn given_project_keys_when_resolved_then_all_allowed() {
    for (key, column) in [
        ("title", "title"),
        ("description", "description"),
        ("createdAt", "created_at"),
        ("dueDate", "due_date"),
    ] {
        assert_that!(
            ProjectColumn::from_key(key).map(ProjectColumn::order_expression),
            some(eq(column))
        );
    }
}

#[test]
fn given_issue_status_filter_when_built_then_applied() {
    let query = ListQuery::<IssueColumn>::build(None, Some("CLOSED"), Some("2"));

    assert_that!(query.status, some(eq(IssueStatus::Closed)));
    assert_that!(query.skip(), eq(10));
    assert_that!(query.take(), eq(10));
}

#[test]
fn given_unknown_status_filter_when_built_then_dropped() {
    let query = ListQuery::<IssueColumn>::build(None, Some("closed"), None);

    assert_that!(query.status, none());
}

#[test]
fn given_project_list_when_status_supplied_then_ignored() {
    let query = ListQuery::<ProjectColumn>::build(None, Some("OPEN"), None);

    assert_that!(query.status, none());
}
