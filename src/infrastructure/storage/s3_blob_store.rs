use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_s3::{
    config::{BehaviorVersion, Region},
    error::DisplayErrorContext,
    primitives::ByteStream,
    types::{BucketLocationConstraint, CreateBucketConfiguration},
    Client,
};
use bytes::Bytes;
use tracing::{debug, info};

use crate::application::ports::{BlobStore, StorageError};

/// Connection settings for an S3-compatible server such as MinIO
#[derive(Debug, Clone)]
pub struct S3Config {
    /// `host:port`, or a full URL carrying its own scheme
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub use_ssl: bool,
}

impl S3Config {
    /// Endpoint URL with a scheme derived from `use_ssl` when none is given
    pub fn endpoint_url(&self) -> String {
        if self.endpoint.contains("://") {
            self.endpoint.clone()
        } else if self.use_ssl {
            format!("https://{}", self.endpoint)
        } else {
            format!("http://{}", self.endpoint)
        }
    }
}

/// Blob store backed by the AWS S3 SDK
#[derive(Clone)]
pub struct S3BlobStore {
    client: Client,
    region: String,
}

impl S3BlobStore {
    pub fn new(config: &S3Config) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "rental-listings",
        );
        let endpoint = config.endpoint_url();

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .endpoint_url(&endpoint)
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .force_path_style(true) // MinIO serves buckets by path
            .build();

        info!(endpoint = %endpoint, region = %config.region, "S3 blob store initialized");

        Self {
            client: Client::from_conf(s3_config),
            region: config.region.clone(),
        }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool, StorageError> {
        match self.client.head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) => {
                let service_err = e.into_service_error();
                if service_err.is_not_found() {
                    Ok(false)
                } else {
                    Err(StorageError::Request(format!(
                        "head bucket {bucket}: {}",
                        DisplayErrorContext(&service_err)
                    )))
                }
            }
        }
    }

    async fn create_bucket(&self, bucket: &str) -> Result<(), StorageError> {
        let mut request = self.client.create_bucket().bucket(bucket);
        if self.region != "us-east-1" {
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(self.region.as_str()))
                    .build(),
            );
        }

        match request.send().await {
            Ok(_) => Ok(()),
            Err(e) => {
                let service_err = e.into_service_error();
                if service_err.is_bucket_already_owned_by_you()
                    || service_err.is_bucket_already_exists()
                {
                    debug!(bucket = %bucket, "Bucket created concurrently");
                    Ok(())
                } else {
                    Err(StorageError::Request(format!(
                        "create bucket {bucket}: {}",
                        DisplayErrorContext(&service_err)
                    )))
                }
            }
        }
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        content: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let size = content.len();

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .content_length(size as i64)
            .body(ByteStream::from(content))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(bucket = %bucket, key = %key, error = %DisplayErrorContext(&e), "S3 put failed");
                StorageError::Request(format!("put object {key}: {}", DisplayErrorContext(&e)))
            })?;

        debug!(bucket = %bucket, key = %key, size, "Object stored");
        Ok(())
    }

    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, StorageError> {
        match self.client.head_object().bucket(bucket).key(key).send().await {
            Ok(_) => Ok(true),
            Err(e) => {
                let service_err = e.into_service_error();
                if service_err.is_not_found() {
                    Ok(false)
                } else {
                    Err(StorageError::Request(format!(
                        "head object {key}: {}",
                        DisplayErrorContext(&service_err)
                    )))
                }
            }
        }
    }

    async fn list_keys(&self, bucket: &str) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        let mut continuation: Option<String> = None;

        loop {
            let output = self
                .client
                .list_objects_v2()
                .bucket(bucket)
                .set_continuation_token(continuation.take())
                .send()
                .await
                .map_err(|e| {
                    let service_err = e.into_service_error();
                    if service_err.is_no_such_bucket() {
                        StorageError::BucketNotFound(bucket.to_string())
                    } else {
                        StorageError::Request(format!(
                            "list bucket {bucket}: {}",
                            DisplayErrorContext(&service_err)
                        ))
                    }
                })?;

            keys.extend(
                output
                    .contents()
                    .iter()
                    .filter_map(|object| object.key().map(str::to_string)),
            );

            match output.next_continuation_token() {
                Some(token) if output.is_truncated().unwrap_or(false) => {
                    continuation = Some(token.to_string());
                }
                _ => break,
            }
        }

        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str, use_ssl: bool) -> S3Config {
        S3Config {
            endpoint: endpoint.to_string(),
            region: "us-east-1".to_string(),
            access_key: "minioadmin".to_string(),
            secret_key: "minioadmin".to_string(),
            use_ssl,
        }
    }

    #[test]
    fn test_endpoint_url_scheme_follows_ssl_flag() {
        assert_eq!(
            config("localhost:9000", false).endpoint_url(),
            "http://localhost:9000"
        );
        assert_eq!(
            config("minio.internal:9000", true).endpoint_url(),
            "https://minio.internal:9000"
        );
    }

    #[test]
    fn test_endpoint_url_keeps_explicit_scheme() {
        assert_eq!(
            config("http://127.0.0.1:9000", true).endpoint_url(),
            "http://127.0.0.1:9000"
        );
    }
}
