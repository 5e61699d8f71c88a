use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::domain::{
    entities::{Home, HomeDetails, User},
    errors::DomainError,
};

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Largest page a caller may request
pub const MAX_PAGE_LIMIT: i64 = 100;

/// A page of homes together with the total count and the requested window.
///
/// `total` and `homes` come from two separate store calls, so under concurrent
/// writes they may disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListResult {
    pub homes: Vec<Home>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}

/// Pagination query as sent by a client.
///
/// Values that are not integers are ignored rather than rejected.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
pub struct PageRequest {
    /// Number of homes to skip (default: 0)
    #[serde(default, deserialize_with = "lenient_int")]
    pub skip: Option<i64>,
    /// Page size (default: 10, max: 100)
    #[serde(default, deserialize_with = "lenient_int")]
    pub limit: Option<i64>,
}

fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

impl PageRequest {
    /// Resolve to a `(skip, limit)` window; out-of-range values fall back to defaults
    pub fn normalize(self) -> (i64, i64) {
        let skip = self.skip.filter(|s| *s >= 0).unwrap_or(0);
        let limit = self
            .limit
            .filter(|l| *l > 0 && *l <= MAX_PAGE_LIMIT)
            .unwrap_or(DEFAULT_PAGE_LIMIT);
        (skip, limit)
    }
}

fn validate_bed(bed: &str) -> Result<(), ValidationError> {
    match bed {
        "single" | "double" => Ok(()),
        _ => Err(ValidationError::new("bed").with_message("bed must be single or double".into())),
    }
}

/// Editable listing fields as submitted by a client
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct HomeForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(range(min = 1, message = "peoples must be positive"))]
    pub peoples: i32,
    #[validate(length(min = 1, message = "room is required"))]
    pub room: String,
    #[validate(custom(function = "validate_bed"))]
    pub bed: String,
    #[validate(range(min = 1, message = "rooms must be positive"))]
    pub rooms: i32,
    #[validate(range(min = 1, message = "bathrooms must be positive"))]
    pub bathrooms: i32,
    #[serde(default)]
    pub smoking: bool,
    #[serde(default)]
    pub guest: bool,
    #[serde(default)]
    pub pet: bool,
    #[serde(default)]
    pub bills_included: bool,
    #[validate(length(min = 1, message = "contract is required"))]
    pub contract: String,
    #[validate(range(min = 1, message = "security_deposit must be positive"))]
    pub security_deposit: i64,
    #[validate(range(min = 1, message = "price must be positive"))]
    pub price: i64,
}

impl HomeForm {
    pub fn into_details(self) -> Result<HomeDetails, DomainError> {
        Ok(HomeDetails {
            bed: self.bed.parse()?,
            title: self.title,
            location: self.location,
            description: self.description,
            peoples: self.peoples,
            room: self.room,
            rooms: self.rooms,
            bathrooms: self.bathrooms,
            smoking: self.smoking,
            guest: self.guest,
            pet: self.pet,
            bills_included: self.bills_included,
            contract: self.contract,
            security_deposit: self.security_deposit,
            price: self.price,
        })
    }
}

/// Photo attached to a creation request, content base64 encoded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhotoPayload {
    pub name: String,
    pub content: String,
}

/// DTO for home creation
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewHomeRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub home: HomeForm,
    #[serde(default)]
    pub photos: Vec<PhotoPayload>,
}

/// DTO for home update; photos cannot be changed after creation
pub type UpdateHomeRequest = HomeForm;

/// DTO for account registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

/// DTO for login
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Access token issued on login, alongside the account it belongs to
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(flatten)]
    pub user: User,
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::HomeForm;

    pub fn sample_form() -> HomeForm {
        HomeForm {
            title: "Sunny flat".to_string(),
            location: "Iran, Tehran".to_string(),
            description: "Home Sweet Home".to_string(),
            peoples: 4,
            room: "room_type".to_string(),
            bed: "double".to_string(),
            rooms: 2,
            bathrooms: 2,
            smoking: false,
            guest: false,
            pet: false,
            bills_included: true,
            contract: "contract_type".to_string(),
            security_deposit: 1_000,
            price: 500,
        }
    }
}
