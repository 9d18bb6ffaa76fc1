use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SubsecRound, Utc};
use error_location::ErrorLocation;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a client-supplied due date.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` (read as UTC) and
/// plain `YYYY-MM-DD` dates (midnight UTC). Sub-second precision is dropped.
#[track_caller]
pub fn parse_due_date(value: &str) -> CoreErrorResult<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc).trunc_subsecs(0));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed.and_utc().trunc_subsecs(0));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight.and_utc());
    }

    Err(CoreError::InvalidDate {
        value: value.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
