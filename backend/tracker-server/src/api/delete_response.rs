use serde::Serialize;

/// Confirmation returned by DELETE endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_id: String,
    pub message: String,
}

impl DeleteResponse {
    pub fn new(deleted_id: impl ToString, message: impl Into<String>) -> Self {
        Self {
            deleted_id: deleted_id.to_string(),
            message: message.into(),
        }
    }
}
