use crate::{ApiError, AppState};

use tracker_auth::Session;

use std::panic::Location;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use error_location::ErrorLocation;

/// Extractor for the caller's session.
///
/// Rejects with `Unauthorized` when the resolver finds no session, so
/// handlers taking it never touch the store for anonymous callers.
pub struct AuthenticatedUser(pub Session);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let authorization = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            state
                .sessions
                .current_session(authorization)
                .map(AuthenticatedUser)
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "Authentication required.".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
        }
    }
}
