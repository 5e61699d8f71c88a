use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

/// Bed arrangement offered by a home
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Bed {
    Single,
    Double,
}

impl Bed {
    /// Stable numeric code used by the document store
    pub fn code(self) -> i16 {
        match self {
            Bed::Single => 1,
            Bed::Double => 2,
        }
    }

    pub fn from_code(code: i16) -> Result<Self, DomainError> {
        match code {
            1 => Ok(Bed::Single),
            2 => Ok(Bed::Double),
            other => Err(DomainError::InvalidBed(other.to_string())),
        }
    }
}

impl std::fmt::Display for Bed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bed::Single => write!(f, "single"),
            Bed::Double => write!(f, "double"),
        }
    }
}

impl std::str::FromStr for Bed {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Bed::Single),
            "double" => Ok(Bed::Double),
            _ => Err(DomainError::InvalidBed(s.to_string())),
        }
    }
}
