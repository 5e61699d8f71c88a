use serde::Serialize;
use utoipa::ToSchema;

/// Registered account; the email doubles as the token subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    email: String,
    name: String,
    #[serde(skip)]
    password_hash: String,
    admin: bool,
}

impl User {
    /// Account that has not been stored yet; the store decides `admin`
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            password_hash: password_hash.into(),
            admin: false,
        }
    }

    /// Reconstruct from storage (e.g., database)
    pub fn reconstruct(email: String, name: String, password_hash: String, admin: bool) -> Self {
        Self {
            email,
            name,
            password_hash,
            admin,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub(crate) fn promote_to_admin(&mut self) {
        self.admin = true;
    }
}
