//! Issue repository for CRUD and list operations on issues.
//!
//! Referential checks for `assigned_to_user_id` and `project_id` are enforced
//! by the schema; a write that breaks one surfaces as
//! [`DbError::ForeignKeyViolation`](crate::DbError::ForeignKeyViolation).

use crate::rows::issue_row::IssueRow;
use crate::rows::latest_issue_row::LatestIssueRow;
use crate::Result as DbErrorResult;

use tracker_core::{Issue, IssueColumn, IssueStatus, IssueWithAssignee, ListQuery, SortColumn};

use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

const ISSUE_COLUMNS: &str = "id, title, description, status, priority, due_date, \
     assigned_to_user_id, project_id, created_at, updated_at";

pub struct IssueRepository;

impl IssueRepository {
    pub async fn create<'e, E>(executor: E, issue: &Issue) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO issues (
                    id, title, description, status, priority, due_date,
                    assigned_to_user_id, project_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(issue.id.to_string())
        .bind(&issue.title)
        .bind(&issue.description)
        .bind(issue.status.as_str())
        .bind(issue.priority.as_str())
        .bind(issue.due_date.map(|dt| dt.timestamp()))
        .bind(issue.assigned_to_user_id.as_deref())
        .bind(issue.project_id.map(|id| id.to_string()))
        .bind(issue.created_at.timestamp())
        .bind(issue.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Issue>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, IssueRow>(&format!(
            "SELECT {ISSUE_COLUMNS} FROM issues WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Issue::try_from).transpose()
    }

    /// Persist every mutable field of `issue`. Returns false when no row matched.
    pub async fn update<'e, E>(executor: E, issue: &Issue) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
              UPDATE issues
              SET title = ?, description = ?, status = ?, priority = ?, due_date = ?,
                  assigned_to_user_id = ?, project_id = ?, updated_at = ?
              WHERE id = ?
            "#,
        )
        .bind(&issue.title)
        .bind(&issue.description)
        .bind(issue.status.as_str())
        .bind(issue.priority.as_str())
        .bind(issue.due_date.map(|dt| dt.timestamp()))
        .bind(issue.assigned_to_user_id.as_deref())
        .bind(issue.project_id.map(|id| id.to_string()))
        .bind(issue.updated_at.timestamp())
        .bind(issue.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Returns false when no row matched.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM issues WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// One page of issues. Unsorted lists come back in insertion order.
    pub async fn find_many<'e, E>(
        executor: E,
        query: &ListQuery<IssueColumn>,
    ) -> DbErrorResult<Vec<Issue>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut builder = QueryBuilder::<Sqlite>::new(format!("SELECT {ISSUE_COLUMNS} FROM issues"));
        push_status_filter(&mut builder, query.status);

        match query.order_by {
            // Expressions come from the allow-list, never from the client
            Some(column) => {
                builder.push(" ORDER BY ");
                builder.push(column.order_expression());
                builder.push(" ASC, rowid ASC");
            }
            None => {
                builder.push(" ORDER BY rowid ASC");
            }
        }

        builder.push(" LIMIT ");
        builder.push_bind(query.take());
        builder.push(" OFFSET ");
        builder.push_bind(query.skip());

        let rows = builder
            .build_query_as::<IssueRow>()
            .fetch_all(executor)
            .await?;

        rows.into_iter()
            .map(Issue::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Total matching the filter, ignoring pagination
    pub async fn count<'e, E>(executor: E, status: Option<IssueStatus>) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM issues");
        push_status_filter(&mut builder, status);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    pub async fn count_by_status<'e, E>(executor: E, status: IssueStatus) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        Self::count(executor, Some(status)).await
    }

    /// Most recently created issues with their assignee embedded
    pub async fn find_latest_with_assignee<'e, E>(
        executor: E,
        limit: i64,
    ) -> DbErrorResult<Vec<IssueWithAssignee>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, LatestIssueRow>(
            r#"
                SELECT
                    i.id, i.title, i.description, i.status, i.priority, i.due_date,
                    i.assigned_to_user_id, i.project_id, i.created_at, i.updated_at,
                    u.id AS user_id, u.name AS user_name,
                    u.email AS user_email, u.image AS user_image
                FROM issues i
                LEFT JOIN users u ON u.id = i.assigned_to_user_id
                ORDER BY i.created_at DESC, i.rowid DESC
                LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(IssueWithAssignee::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}

fn push_status_filter(builder: &mut QueryBuilder<'_, Sqlite>, status: Option<IssueStatus>) {
    if let Some(status) = status {
        builder.push(" WHERE status = ");
        builder.push_bind(status.as_str());
    }
}
