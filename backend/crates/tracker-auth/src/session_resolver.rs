use crate::{AuthError, JwtValidator, Result as AuthErrorResult, Session};

use std::panic::Location;

use error_location::ErrorLocation;

const BEARER_PREFIX: &str = "Bearer ";

/// Resolves the session for an incoming request.
pub enum SessionResolver {
    /// Sessions come from bearer tokens checked by the validator
    Jwt(JwtValidator),
    /// Authentication is off; every request runs as this session
    Disabled(Session),
}

impl SessionResolver {
    /// Current session for a raw `Authorization` header value, or `None` when the
    /// caller is unauthenticated. Invalid tokens are logged and treated as absent.
    pub fn current_session(&self, authorization: Option<&str>) -> Option<Session> {
        match self {
            Self::Disabled(session) => Some(session.clone()),
            Self::Jwt(validator) => {
                let header = authorization?;
                let result = bearer_token(header).and_then(|token| validator.validate(token));
                match result {
                    Ok(claims) => Some(Session::from(claims)),
                    Err(e) => {
                        log::warn!("Rejected credentials: {}", e);
                        None
                    }
                }
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Jwt(_))
    }

    /// Token algorithm in use, or "disabled"
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::Jwt(validator) => validator.algorithm(),
            Self::Disabled(_) => "disabled",
        }
    }
}

/// Extract the token from a `Bearer <token>` header value
#[track_caller]
pub fn bearer_token(header: &str) -> AuthErrorResult<&str> {
    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })?
        .trim();

    if token.is_empty() {
        return Err(AuthError::InvalidToken {
            message: "empty bearer token".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}
