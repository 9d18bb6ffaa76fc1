//! Raw row shapes and their conversion into models.

pub(crate) mod issue_row;
pub(crate) mod latest_issue_row;
pub(crate) mod project_row;
pub(crate) mod user_row;

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(column: &str, value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid UUID in {column}: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_timestamp(column: &str, value: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {column}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_optional_timestamp(
    column: &str,
    value: Option<i64>,
) -> DbErrorResult<Option<DateTime<Utc>>> {
    value.map(|ts| parse_timestamp(column, ts)).transpose()
}
