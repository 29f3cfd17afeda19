//! Object storage for generated artifacts.
//!
//! The only operation the platform needs is bulk deletion of artifact
//! objects during orphan cleanup, so the provider trait covers exactly
//! that. Production uses an S3-compatible bucket; tests substitute a
//! recording double.

use async_trait::async_trait;
use aws_sdk_s3::types::{Delete, ObjectIdentifier};

/// Errors from the storage provider.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage delete failed: {0}")]
    Delete(String),
}

/// Narrow provider interface over the artifact bucket.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Bulk-delete the given object keys from the artifact bucket.
    async fn remove_objects(&self, keys: &[String]) -> Result<(), StorageError>;
}

/// S3-compatible implementation of [`ObjectStorage`].
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Storage {
    /// Build a client for `bucket` using the default credential chain
    /// (environment, shared config, instance metadata).
    pub async fn from_env(bucket: impl Into<String>) -> Self {
        let config = aws_config::load_from_env().await;
        Self {
            client: aws_sdk_s3::Client::new(&config),
            bucket: bucket.into(),
        }
    }

    /// Target bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn remove_objects(&self, keys: &[String]) -> Result<(), StorageError> {
        if keys.is_empty() {
            return Ok(());
        }

        let objects: Vec<ObjectIdentifier> = keys
            .iter()
            .map(|key| {
                ObjectIdentifier::builder()
                    .key(key)
                    .build()
                    .map_err(|e| StorageError::Delete(e.to_string()))
            })
            .collect::<Result<_, _>>()?;

        let delete = Delete::builder()
            .set_objects(Some(objects))
            .build()
            .map_err(|e| StorageError::Delete(e.to_string()))?;

        let output = self
            .client
            .delete_objects()
            .bucket(&self.bucket)
            .delete(delete)
            .send()
            .await
            .map_err(|e| StorageError::Delete(e.to_string()))?;

        // Partial failures come back per-key in the response body.
        for error in output.errors() {
            tracing::error!(
                key = error.key().unwrap_or("<unknown>"),
                message = error.message().unwrap_or("<no message>"),
                "Storage object delete failed"
            );
        }

        tracing::debug!(
            bucket = %self.bucket,
            deleted = output.deleted().len(),
            failed = output.errors().len(),
            "Bulk object delete completed"
        );

        Ok(())
    }
}
