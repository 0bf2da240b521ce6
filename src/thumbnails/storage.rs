use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object `{key}` not found in bucket `{bucket}`")]
    NotFound { bucket: String, key: String },
    #[error("access denied to object `{key}` in bucket `{bucket}`")]
    AccessDenied { bucket: String, key: String },
    #[error("network error while accessing object `{key}` in bucket `{bucket}`: {reason}")]
    Network {
        bucket: String,
        key: String,
        reason: String,
    },
}

/// Blob storage addressed by `(bucket, key)`.
///
/// Implementations own their networking, authentication and retry policy; the pipeline calls
/// each method at most once per invocation.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError>;

    async fn store(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;
}
