//! Project repository for CRUD and list operations on projects.

use crate::rows::project_row::ProjectRow;
use crate::Result as DbErrorResult;

use tracker_core::{ListQuery, Project, ProjectColumn, SortColumn};

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

const PROJECT_COLUMNS: &str = "id, title, description, due_date, created_by, created_at";

pub struct ProjectRepository;

impl ProjectRepository {
    pub async fn create<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO projects (
                    id, title, description, due_date, created_by, created_at
                ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.due_date.map(|dt| dt.timestamp()))
        .bind(&project.created_by)
        .bind(project.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Project::try_from).transpose()
    }

    pub async fn exists<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM projects WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        Ok(found.is_some())
    }

    pub async fn update<'e, E>(executor: E, project: &Project) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
              UPDATE projects
              SET title = ?, description = ?, due_date = ?, created_by = ?
              WHERE id = ?
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.due_date.map(|dt| dt.timestamp()))
        .bind(&project.created_by)
        .bind(project.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Fails with a foreign key violation while issues still reference the project.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_many<'e, E>(
        executor: E,
        query: &ListQuery<ProjectColumn>,
    ) -> DbErrorResult<Vec<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut builder =
            QueryBuilder::<Sqlite>::new(format!("SELECT {PROJECT_COLUMNS} FROM projects"));

        match query.order_by {
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
            .build_query_as::<ProjectRow>()
            .fetch_all(executor)
            .await?;

        rows.into_iter()
            .map(Project::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn count<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    /// Projects due at or after `now`
    pub async fn count_due_from<'e, E>(executor: E, now: DateTime<Utc>) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects WHERE due_date >= ?")
                .bind(now.timestamp())
                .fetch_one(executor)
                .await?;

        Ok(count)
    }

    /// Projects due strictly before `now`
    pub async fn count_due_before<'e, E>(executor: E, now: DateTime<Utc>) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects WHERE due_date < ?")
                .bind(now.timestamp())
                .fetch_one(executor)
                .await?;

        Ok(count)
    }

    pub async fn find_latest<'e, E>(executor: E, limit: i64) -> DbErrorResult<Vec<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC, rowid DESC LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(Project::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}
