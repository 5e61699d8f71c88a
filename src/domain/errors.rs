use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid photo key: {0}")]
    InvalidKey(String),

    #[error("Invalid home id: {0}")]
    InvalidHomeId(String),

    #[error("Invalid bed type: {0}")]
    InvalidBed(String),
}
