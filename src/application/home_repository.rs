//! Home persistence across the document store and the photo blob store.
//!
//! Writes are not transactional across the two stores. A `set` that fails
//! after uploading some photos leaves those blobs behind; `PhotoAudit` reports
//! them.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::ListResult;
use crate::application::errors::HomeRepositoryError;
use crate::application::ports::{ensure_bucket, BlobStore, HomeDocumentStore, IdGenerator};
use crate::domain::entities::{Home, HomeDetails, Photo};
use crate::domain::value_objects::{HomeId, PhotoKey};

/// Bucket holding listing photos unless configured otherwise
pub const DEFAULT_PHOTO_BUCKET: &str = "photos";

/// Every photo needs a non-empty name unique within the listing, otherwise
/// its key would not parse back or would overwrite a sibling.
fn check_photo_names(photos: &[Photo]) -> Result<(), HomeRepositoryError> {
    let mut seen = HashSet::with_capacity(photos.len());
    for photo in photos {
        if photo.name().is_empty() {
            return Err(HomeRepositoryError::EmptyPhotoName);
        }
        if !seen.insert(photo.name()) {
            return Err(HomeRepositoryError::DuplicatePhotoName(photo.name().to_string()));
        }
    }
    Ok(())
}

/// Owns the lifecycle of home documents and their photo blobs
pub struct HomeRepository {
    documents: Arc<dyn HomeDocumentStore>,
    blobs: Arc<dyn BlobStore>,
    ids: Arc<dyn IdGenerator>,
    bucket: String,
}

impl HomeRepository {
    pub fn new(
        documents: Arc<dyn HomeDocumentStore>,
        blobs: Arc<dyn BlobStore>,
        ids: Arc<dyn IdGenerator>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            documents,
            blobs,
            ids,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Persist a new home and upload its photos.
    ///
    /// On success `home` carries its assigned id and the `name -> key` map of
    /// every uploaded photo. Any failure aborts the remaining steps; blobs
    /// uploaded before the failure are not removed.
    pub async fn set(&self, home: &mut Home, photos: &[Photo]) -> Result<(), HomeRepositoryError> {
        if home.id().is_some() {
            return Err(HomeRepositoryError::IdNotEmpty);
        }
        check_photo_names(photos)?;

        ensure_bucket(self.blobs.as_ref(), &self.bucket)
            .await
            .map_err(|e| HomeRepositoryError::storage("ensure photo bucket", e))?;

        let id = self.ids.next_id();
        home.assign_id(id.clone());

        for photo in photos {
            let key = PhotoKey::derive(&id, photo.name());
            debug!(home_id = %id, key = %key, size = photo.size_bytes(), "Uploading photo");

            if let Err(e) = self
                .blobs
                .put_object(
                    &self.bucket,
                    key.as_str(),
                    photo.content().clone(),
                    photo.content_type(),
                )
                .await
            {
                warn!(home_id = %id, key = %key, error = %e, "Photo upload failed, earlier uploads are orphaned");
                return Err(HomeRepositoryError::storage("upload photo", e));
            }

            home.record_photo(photo.name().to_string(), key);
        }

        if let Err(e) = self.documents.insert_one(home).await {
            warn!(home_id = %id, photos = photos.len(), error = %e, "Home insert failed, uploaded photos are orphaned");
            return Err(HomeRepositoryError::storage("insert home", e));
        }

        info!(home_id = %id, owner = %home.owner(), photos = photos.len(), "Home created");
        Ok(())
    }

    /// Fetch a home by id
    pub async fn get(&self, id: &HomeId) -> Result<Home, HomeRepositoryError> {
        self.documents
            .find_one(id)
            .await
            .map_err(|e| HomeRepositoryError::storage("find home", e))?
            .ok_or_else(|| HomeRepositoryError::IdNotFound(id.clone()))
    }

    /// Fetch one page of homes along with the total count.
    ///
    /// `skip` and `limit` are expected to be normalized by the caller.
    pub async fn list(&self, skip: i64, limit: i64) -> Result<ListResult, HomeRepositoryError> {
        let total = self
            .documents
            .count()
            .await
            .map_err(|e| HomeRepositoryError::storage("count homes", e))?;

        let homes = self
            .documents
            .find_window(skip, limit)
            .await
            .map_err(|e| HomeRepositoryError::storage("list homes", e))?;

        debug!(skip, limit, total, returned = homes.len(), "Listed homes");

        Ok(ListResult {
            homes,
            total,
            skip,
            limit,
        })
    }

    /// Overwrite the editable fields of an existing home.
    ///
    /// Last write wins. Identity, owner and photos are never touched, and no
    /// permission check happens here.
    pub async fn update(&self, id: &HomeId, details: &HomeDetails) -> Result<(), HomeRepositoryError> {
        let matched = self
            .documents
            .update_one(id, details)
            .await
            .map_err(|e| HomeRepositoryError::storage("update home", e))?;

        if matched == 0 {
            return Err(HomeRepositoryError::IdNotFound(id.clone()));
        }

        info!(home_id = %id, "Home updated");
        Ok(())
    }
}
