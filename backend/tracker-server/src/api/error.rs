use tracker_core::FieldErrors;
use tracker_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;

const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

/// API errors that map to HTTP status codes
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {fields} {location}")]
    Validation {
        fields: FieldErrors,
        location: ErrorLocation,
    },

    #[error("Invalid reference: {message} {location}")]
    InvalidReference {
        message: String,
        location: ErrorLocation,
    },

    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_reference(message: impl Into<String>) -> Self {
        Self::InvalidReference {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } | Self::InvalidReference { .. } | Self::BadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::InvalidReference { .. } => "INVALID_REFERENCE",
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().to_string();

        log::error!("{}", self);

        let body = match self {
            Self::Validation { fields, .. } => ApiErrorBody {
                code,
                message: "One or more fields are invalid.".to_string(),
                fields: Some(fields),
            },
            // Never echo the underlying cause
            Self::Internal { .. } => ApiErrorBody {
                code,
                message: INTERNAL_ERROR_MESSAGE.to_string(),
                fields: None,
            },
            Self::Unauthorized { message, .. }
            | Self::InvalidReference { message, .. }
            | Self::BadRequest { message, .. }
            | Self::NotFound { message, .. }
            | Self::Conflict { message, .. } => ApiErrorBody {
                code,
                message,
                fields: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<FieldErrors> for ApiError {
    #[track_caller]
    fn from(fields: FieldErrors) -> Self {
        Self::Validation {
            fields,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            DbError::ForeignKeyViolation { .. } => Self::InvalidReference {
                message: "Referenced user or project does not exist.".to_string(),
                location,
            },
            other => Self::Internal {
                message: other.to_string(),
                location,
            },
        }
    }
}

impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(err: uuid::Error) -> Self {
        Self::BadRequest {
            message: format!("Invalid id: {err}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
