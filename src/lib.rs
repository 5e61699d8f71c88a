//! # Rental Listings
//!
//! Backend for rental home listings. A listing is a structured document in a
//! document store; its photos are blobs in an S3-compatible bucket, keyed by
//! `{home_id}_{photo_name}`.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Home aggregate, photo keys, owner-or-admin rule
//! - **Application**: `HomeRepository`, use cases and ports (interfaces)
//! - **Infrastructure**: Postgres, S3 and in-memory adapters
//! - **API**: axum handlers, JWT middleware, OpenAPI
//!
//! ## Example Usage
//!
//! ```no_run
//! use rental_listings::application::HomeRepository;
//! use rental_listings::infrastructure::{
//!     identity::ObjectIdGenerator, persistence::InMemoryHomeStore, storage::InMemoryBlobStore,
//! };
//! use std::sync::Arc;
//!
//! let repository = HomeRepository::new(
//!     Arc::new(InMemoryHomeStore::new()),
//!     Arc::new(InMemoryBlobStore::new()),
//!     Arc::new(ObjectIdGenerator::new()),
//!     "photos",
//! );
//! # let _ = repository;
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
