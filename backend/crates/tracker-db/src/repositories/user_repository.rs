//! Read-only access to users provisioned by the auth provider.

use crate::rows::user_row::UserRow;
use crate::Result as DbErrorResult;

use tracker_core::User;

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_id<'e, E>(executor: E, id: &str) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, image FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(User::from))
    }

    pub async fn exists<'e, E>(executor: E, id: &str) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(found.is_some())
    }

    /// Every user ordered by name. Users without a name sort first.
    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, image FROM users ORDER BY name ASC, id ASC",
        )
        .fetch_all(executor)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
