use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use thiserror::Error;

use crate::domain::entities::{Home, HomeDetails};
use crate::domain::value_objects::HomeId;

#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt document {id}: {reason}")]
    CorruptDocument { id: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for the collection holding home documents
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HomeDocumentStore: Send + Sync {
    /// Insert a fully assigned home
    async fn insert_one(&self, home: &Home) -> Result<(), DocumentStoreError>;

    /// Find a home by id, `None` when no document matches
    async fn find_one(&self, id: &HomeId) -> Result<Option<Home>, DocumentStoreError>;

    /// Fetch a window of homes in a stable order
    async fn find_window(&self, skip: i64, limit: i64) -> Result<Vec<Home>, DocumentStoreError>;

    /// Count every stored home
    async fn count(&self) -> Result<i64, DocumentStoreError>;

    /// Overwrite the editable fields of one home, returning the matched count
    async fn update_one(
        &self,
        id: &HomeId,
        details: &HomeDetails,
    ) -> Result<u64, DocumentStoreError>;
}
