use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::ports::{BlobStore, HomeDocumentStore};

const CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// Dependencies probed by the readiness endpoint
#[derive(Clone)]
pub struct ReadinessProbe {
    pub documents: Arc<dyn HomeDocumentStore>,
    pub blobs: Arc<dyn BlobStore>,
    pub bucket: String,
}

/// Basic health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Readiness response
#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub documents: String,
    pub photos: String,
    pub response_time_ms: u128,
}

/// GET /health
/// Basic health check endpoint (no dependency checks)
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health/ready
/// Readiness probe covering the document store and the photo bucket
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "Service is not ready", body = ReadinessResponse)
    )
)]
pub async fn readiness_handler(
    State(probe): State<ReadinessProbe>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let start_time = Instant::now();

    let documents = match tokio::time::timeout(CHECK_TIMEOUT, probe.documents.count()).await {
        Ok(Ok(_)) => "connected",
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Document store not ready");
            "error"
        }
        Err(_) => "timeout",
    };

    // a missing bucket is created on first upload, so it does not block readiness
    let photos =
        match tokio::time::timeout(CHECK_TIMEOUT, probe.blobs.bucket_exists(&probe.bucket)).await {
            Ok(Ok(true)) => "connected",
            Ok(Ok(false)) => "bucket_missing",
            Ok(Err(e)) => {
                tracing::warn!(bucket = %probe.bucket, error = %e, "Blob store not ready");
                "error"
            }
            Err(_) => "timeout",
        };

    let ready = documents == "connected" && photos != "error" && photos != "timeout";
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadinessResponse {
            status: if ready { "ready" } else { "not_ready" }.to_string(),
            documents: documents.to_string(),
            photos: photos.to_string(),
            response_time_ms: start_time.elapsed().as_millis(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        DocumentStoreError, MockBlobStore, MockHomeDocumentStore, StorageError,
    };

    fn probe(documents: MockHomeDocumentStore, blobs: MockBlobStore) -> ReadinessProbe {
        ReadinessProbe {
            documents: Arc::new(documents),
            blobs: Arc::new(blobs),
            bucket: "photos".to_string(),
        }
    }

    #[tokio::test]
    async fn test_health_reports_package() {
        let Json(body) = health_handler().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_ready_with_missing_bucket() {
        let mut documents = MockHomeDocumentStore::new();
        documents.expect_count().returning(|| Ok(3));
        let mut blobs = MockBlobStore::new();
        blobs.expect_bucket_exists().returning(|_| Ok(false));

        let (status, Json(body)) = readiness_handler(State(probe(documents, blobs))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.photos, "bucket_missing");
    }

    #[tokio::test]
    async fn test_not_ready_when_store_fails() {
        let mut documents = MockHomeDocumentStore::new();
        documents
            .expect_count()
            .returning(|| Err(DocumentStoreError::Internal("down".to_string())));
        let mut blobs = MockBlobStore::new();
        blobs
            .expect_bucket_exists()
            .returning(|_| Err(StorageError::Request("refused".to_string())));

        let (status, Json(body)) = readiness_handler(State(probe(documents, blobs))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "not_ready");
        assert_eq!(body.documents, "error");
        assert_eq!(body.photos, "error");
    }
}
