pub mod builder;
pub mod dto;
pub mod errors;
pub mod home_repository;
pub mod photo_audit;
pub mod ports;
pub mod use_cases;

pub use home_repository::{HomeRepository, DEFAULT_PHOTO_BUCKET};
pub use photo_audit::{AuditError, AuditReport, PhotoAudit};
