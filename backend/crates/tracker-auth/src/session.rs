use crate::Claims;

/// The authenticated caller of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, name: Option<String>, email: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name,
            email,
        }
    }

    /// Human-readable label: name, then email, then user id
    pub fn display_label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| self.email.as_deref().filter(|email| !email.trim().is_empty()))
            .unwrap_or(&self.user_id)
    }
}

impl From<Claims> for Session {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            name: claims.name,
            email: claims.email,
        }
    }
}
