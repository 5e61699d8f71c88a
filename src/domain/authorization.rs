use crate::domain::entities::Home;

/// Identity facts extracted from an authenticated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub subject: String,
    pub is_admin: bool,
}

impl Claims {
    pub fn new(subject: impl Into<String>, is_admin: bool) -> Self {
        Self {
            subject: subject.into(),
            is_admin,
        }
    }

    /// Owner-or-admin rule for mutating a listing
    pub fn can_modify(&self, home: &Home) -> bool {
        self.is_admin || home.owner() == self.subject
    }
}

/// Authorization error types
#[derive(Debug, thiserror::Error)]
pub enum AuthorizationError {
    #[error("Authentication required: {0}")]
    AuthenticationRequired(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Access forbidden: {0}")]
    AccessForbidden(String),
}
