use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

/// Opaque identity of a home listing.
///
/// Ids minted by the service are 24 lowercase hex characters. Ids coming from
/// the outside (path parameters, audit tooling) are only required to be
/// non-empty, so a lookup for an id that was never issued reports "not found"
/// rather than a format error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String)]
pub struct HomeId(String);

impl HomeId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::InvalidHomeId("id cannot be empty".to_string()));
        }
        Ok(Self(id))
    }

    /// Wrap an id minted by an `IdGenerator`, which is never empty
    pub(crate) fn from_generated(id: String) -> Self {
        debug_assert!(!id.is_empty());
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HomeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for HomeId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for HomeId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HomeId> for String {
    fn from(id: HomeId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_id_rejects_empty() {
        assert!(matches!(HomeId::new(""), Err(DomainError::InvalidHomeId(_))));
    }

    #[test]
    fn test_home_id_accepts_opaque_values() {
        let id = HomeId::new("invalid_id").unwrap();
        assert_eq!(id.as_str(), "invalid_id");
        assert_eq!(id.to_string(), "invalid_id");
    }

    #[test]
    fn test_home_id_deserialize_rejects_empty() {
        let parsed: Result<HomeId, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());

        let parsed: HomeId = serde_json::from_str("\"65f1a2b3c4d5e6f708192a3b\"").unwrap();
        assert_eq!(parsed.as_str(), "65f1a2b3c4d5e6f708192a3b");
    }
}
