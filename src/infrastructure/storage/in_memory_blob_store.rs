use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use crate::application::ports::{BlobStore, StorageError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub content: Bytes,
    pub content_type: String,
}

/// Process-local object store for tests and single-node development
#[derive(Default)]
pub struct InMemoryBlobStore {
    buckets: DashMap<String, DashMap<String, StoredObject>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored object, mainly for assertions
    pub fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.buckets
            .get(bucket)
            .and_then(|objects| objects.get(key).map(|o| o.value().clone()))
    }

    pub fn has_bucket(&self, bucket: &str) -> bool {
        self.buckets.contains_key(bucket)
    }

    pub fn object_count(&self, bucket: &str) -> usize {
        self.buckets.get(bucket).map(|b| b.len()).unwrap_or(0)
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool, StorageError> {
        Ok(self.buckets.contains_key(bucket))
    }

    async fn create_bucket(&self, bucket: &str) -> Result<(), StorageError> {
        self.buckets.entry(bucket.to_string()).or_default();
        Ok(())
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        content: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let objects = self
            .buckets
            .get(bucket)
            .ok_or_else(|| StorageError::BucketNotFound(bucket.to_string()))?;

        objects.insert(
            key.to_string(),
            StoredObject {
                content,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, StorageError> {
        Ok(self
            .buckets
            .get(bucket)
            .map(|objects| objects.contains_key(key))
            .unwrap_or(false))
    }

    async fn list_keys(&self, bucket: &str) -> Result<Vec<String>, StorageError> {
        let objects = self
            .buckets
            .get(bucket)
            .ok_or_else(|| StorageError::BucketNotFound(bucket.to_string()))?;

        let mut keys: Vec<String> = objects.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();
        Ok(keys)
    }
}
