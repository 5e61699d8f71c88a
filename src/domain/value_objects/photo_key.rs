use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::HomeId;

/// Separator between the home id and the photo name inside a key.
///
/// Generated home ids are hex, so the first separator in a key always marks
/// the end of the id even when the photo name contains separators itself.
pub const KEY_SEPARATOR: char = '_';

/// Blob store key of a single photo: `{home_id}_{photo_name}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String)]
pub struct PhotoKey(String);

impl PhotoKey {
    /// Derive the key for `photo_name` of the given home
    pub fn derive(home_id: &HomeId, photo_name: &str) -> Self {
        Self(format!("{}{}{}", home_id.as_str(), KEY_SEPARATOR, photo_name))
    }

    /// Split a key back into its home id and photo name
    pub fn parse(key: &str) -> Result<(HomeId, String), DomainError> {
        let (id, name) = key
            .split_once(KEY_SEPARATOR)
            .ok_or_else(|| DomainError::InvalidKey(key.to_string()))?;

        if id.is_empty() || name.is_empty() {
            return Err(DomainError::InvalidKey(key.to_string()));
        }

        let id = HomeId::new(id).map_err(|_| DomainError::InvalidKey(key.to_string()))?;
        Ok((id, name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhotoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhotoKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)?;
        Ok(Self(s.to_string()))
    }
}
