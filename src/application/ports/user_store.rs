use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use thiserror::Error;

use crate::domain::entities::User;

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for the account collection, keyed by email
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new account and return it as stored.
    ///
    /// The first account ever stored is made an admin.
    async fn insert(&self, user: &User) -> Result<User, UserStoreError>;

    /// Find an account by its exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError>;
}
