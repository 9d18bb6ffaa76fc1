use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {source} {location}")]
    Migration {
        source: sqlx::migrate::MigrateError,
        location: ErrorLocation,
    },

    /// A stored row could not be turned back into a model
    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Foreign key violation: {message} {location}")]
    ForeignKeyViolation {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, Self::ForeignKeyViolation { .. })
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let Some(db_error) = source.as_database_error()
            && (db_error.is_foreign_key_violation()
                || db_error.message().contains("FOREIGN KEY constraint failed"))
        {
            return Self::ForeignKeyViolation {
                message: db_error.message().to_string(),
                location,
            };
        }

        Self::Sqlx { source, location }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
