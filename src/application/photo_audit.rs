use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::application::errors::HomeRepositoryError;
use crate::application::ports::{BlobStore, StorageError};
use crate::application::HomeRepository;
use crate::domain::entities::Home;
use crate::domain::value_objects::{HomeId, PhotoKey};

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Repository error: {0}")]
    Repository(#[from] HomeRepositoryError),
}

/// Outcome of one scan over the photo bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub scanned: usize,
    /// Keys that do not follow the `{home_id}_{name}` layout
    pub invalid: Vec<String>,
    /// Keys whose home is missing or no longer references them
    pub orphaned: Vec<String>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty() && self.orphaned.is_empty()
    }
}

/// Cross-checks the photo bucket against stored homes.
///
/// Photo uploads and the home insert are not atomic, so a failed or cancelled
/// create can leave blobs nobody references. The audit finds them. It never
/// deletes anything.
pub struct PhotoAudit {
    repository: Arc<HomeRepository>,
    blobs: Arc<dyn BlobStore>,
}

impl PhotoAudit {
    pub fn new(repository: Arc<HomeRepository>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { repository, blobs }
    }

    pub async fn run(&self) -> Result<AuditReport, AuditError> {
        let bucket = self.repository.bucket();
        if !self.blobs.bucket_exists(bucket).await? {
            debug!(bucket = %bucket, "Photo bucket missing, nothing to audit");
            return Ok(AuditReport::default());
        }

        let keys = self.blobs.list_keys(bucket).await?;
        let mut report = AuditReport {
            scanned: keys.len(),
            ..Default::default()
        };
        // One lookup per home, however many photos it has
        let mut homes: HashMap<HomeId, Option<Home>> = HashMap::new();

        for key in keys {
            let (home_id, name) = match PhotoKey::parse(&key) {
                Ok(parsed) => parsed,
                Err(e) => {
                    debug!(key = %key, error = %e, "Unparseable photo key");
                    report.invalid.push(key);
                    continue;
                }
            };

            if !homes.contains_key(&home_id) {
                let home = match self.repository.get(&home_id).await {
                    Ok(home) => Some(home),
                    Err(HomeRepositoryError::IdNotFound(_)) => None,
                    Err(e) => return Err(e.into()),
                };
                homes.insert(home_id.clone(), home);
            }

            let referenced = homes
                .get(&home_id)
                .and_then(Option::as_ref)
                .and_then(|home| home.photos().get(&name))
                .is_some_and(|recorded| recorded.as_str() == key);

            if !referenced {
                report.orphaned.push(key);
            }
        }

        if report.is_clean() {
            info!(bucket = %bucket, scanned = report.scanned, "Photo audit clean");
        } else {
            warn!(
                bucket = %bucket,
                scanned = report.scanned,
                invalid = report.invalid.len(),
                orphaned = report.orphaned.len(),
                "Photo audit found unreferenced keys"
            );
        }

        Ok(report)
    }
}
