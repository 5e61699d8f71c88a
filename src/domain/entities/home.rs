use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::value_objects::{Bed, HomeId, PhotoKey};

/// Fields of a listing its owner may change after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HomeDetails {
    pub title: String,
    pub location: String,
    pub description: String,
    pub peoples: i32,
    pub room: String,
    pub bed: Bed,
    pub rooms: i32,
    pub bathrooms: i32,
    pub smoking: bool,
    pub guest: bool,
    pub pet: bool,
    pub bills_included: bool,
    pub contract: String,
    pub security_deposit: i64,
    pub price: i64,
}

/// Home aggregate root - a listing offered for rent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Home {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<HomeId>,
    owner: String,
    #[serde(flatten)]
    details: HomeDetails,
    #[serde(default)]
    photos: BTreeMap<String, PhotoKey>,
}

impl Home {
    /// Create a listing that has not been persisted yet
    pub fn new(owner: impl Into<String>, details: HomeDetails) -> Self {
        Self {
            id: None,
            owner: owner.into(),
            details,
            photos: BTreeMap::new(),
        }
    }

    /// Reconstruct from storage (e.g., database)
    pub fn reconstruct(
        id: HomeId,
        owner: String,
        details: HomeDetails,
        photos: BTreeMap<String, PhotoKey>,
    ) -> Self {
        Self {
            id: Some(id),
            owner,
            details,
            photos,
        }
    }

    pub fn id(&self) -> Option<&HomeId> {
        self.id.as_ref()
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn details(&self) -> &HomeDetails {
        &self.details
    }

    pub fn photos(&self) -> &BTreeMap<String, PhotoKey> {
        &self.photos
    }

    pub(crate) fn assign_id(&mut self, id: HomeId) {
        self.id = Some(id);
    }

    pub(crate) fn record_photo(&mut self, name: String, key: PhotoKey) {
        self.photos.insert(name, key);
    }

    /// Replace the editable fields, keeping identity, owner and photos
    pub fn apply_details(&mut self, details: HomeDetails) {
        self.details = details;
    }
}
