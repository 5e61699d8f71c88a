mod in_memory_blob_store;
mod s3_blob_store;

pub use in_memory_blob_store::{InMemoryBlobStore, StoredObject};
pub use s3_blob_store::{S3BlobStore, S3Config};
