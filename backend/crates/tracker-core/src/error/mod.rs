use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid issue status: {value} {location}")]
    InvalidIssueStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid date: {value} {location}")]
    InvalidDate {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
