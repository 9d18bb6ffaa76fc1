use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Header carrying the number of rows matching a list query, across all pages
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// One page of a list endpoint: a JSON array plus the total count header
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        (
            [(TOTAL_COUNT_HEADER, self.total.to_string())],
            Json(self.items),
        )
            .into_response()
    }
}
