mod blob_store;
mod claims_resolver;
mod home_document_store;
mod id_generator;
mod password_hasher;
mod token_issuer;
mod user_store;

pub use blob_store::{ensure_bucket, BlobStore, StorageError};
pub use claims_resolver::ClaimsResolver;
pub use home_document_store::{DocumentStoreError, HomeDocumentStore};
pub use id_generator::IdGenerator;
pub use password_hasher::PasswordHasher;
pub use token_issuer::TokenIssuer;
pub use user_store::{UserStore, UserStoreError};

#[cfg(test)]
pub use blob_store::MockBlobStore;
#[cfg(test)]
pub use claims_resolver::MockClaimsResolver;
#[cfg(test)]
pub use home_document_store::MockHomeDocumentStore;
#[cfg(test)]
pub use id_generator::MockIdGenerator;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
#[cfg(test)]
pub use token_issuer::MockTokenIssuer;
#[cfg(test)]
pub use user_store::MockUserStore;
