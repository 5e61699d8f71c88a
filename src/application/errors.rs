//! Error types shared by the home repository and the use cases built on it

use thiserror::Error;

use crate::application::ports::{DocumentStoreError, StorageError, UserStoreError};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::HomeId;

/// Underlying fault of either storage system
#[derive(Debug, Error)]
pub enum StorageFault {
    #[error(transparent)]
    Document(#[from] DocumentStoreError),

    #[error(transparent)]
    Blob(#[from] StorageError),
}

/// Errors returned by [`HomeRepository`](crate::application::HomeRepository)
#[derive(Debug, Error)]
pub enum HomeRepositoryError {
    #[error("home id must be empty")]
    IdNotEmpty,

    #[error("home id does not exist: {0}")]
    IdNotFound(HomeId),

    #[error("photo name must not be empty")]
    EmptyPhotoName,

    #[error("duplicate photo name: {0}")]
    DuplicatePhotoName(String),

    #[error("storage failure during {operation}: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: StorageFault,
    },
}

impl HomeRepositoryError {
    pub(crate) fn storage(operation: &'static str, source: impl Into<StorageFault>) -> Self {
        Self::Storage {
            operation,
            source: source.into(),
        }
    }
}

/// Common error type for home use cases (create, list, update)
#[derive(Debug, Error)]
pub enum HomeUseCaseError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(#[from] HomeRepositoryError),
}

/// Errors of the register and login use cases
#[derive(Debug, Error)]
pub enum UserUseCaseError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("email {0} already exists")]
    DuplicateEmail(String),

    #[error("email {0} does not exist")]
    EmailNotFound(String),

    #[error("incorrect password")]
    IncorrectPassword,

    #[error("credential failure: {0}")]
    Credentials(String),

    #[error("user store failure: {0}")]
    Store(#[from] UserStoreError),
}
