use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::{automock, predicate::*};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Bucket not found: {0}")]
    BucketNotFound(String),

    #[error("Object store request failed: {0}")]
    Request(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for an S3-compatible object store
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Check whether a bucket exists
    async fn bucket_exists(&self, bucket: &str) -> Result<bool, StorageError>;

    /// Create a bucket; a bucket that already exists is not an error
    async fn create_bucket(&self, bucket: &str) -> Result<(), StorageError>;

    /// Upload an object, overwriting any previous content under `key`
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        content: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError>;

    /// Check whether an object exists
    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, StorageError>;

    /// List every key in a bucket
    async fn list_keys(&self, bucket: &str) -> Result<Vec<String>, StorageError>;
}

/// Make sure `bucket` exists, creating it only when absent
pub async fn ensure_bucket(store: &dyn BlobStore, bucket: &str) -> Result<(), StorageError> {
    if store.bucket_exists(bucket).await? {
        debug!(bucket = %bucket, "Bucket already exists");
        return Ok(());
    }

    store.create_bucket(bucket).await?;
    info!(bucket = %bucket, "Bucket created");
    Ok(())
}
