#[cfg(test)]
use mockall::automock;

use crate::domain::authorization::{AuthorizationError, Claims};

/// Port turning a bearer credential into the caller's claims
#[cfg_attr(test, automock)]
pub trait ClaimsResolver: Send + Sync {
    fn resolve(&self, token: &str) -> Result<Claims, AuthorizationError>;
}
