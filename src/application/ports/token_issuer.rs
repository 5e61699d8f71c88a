#[cfg(test)]
use mockall::automock;

use crate::domain::entities::User;

/// Port minting access tokens that a `ClaimsResolver` accepts
#[cfg_attr(test, automock)]
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> Result<String, String>;
}
