//! Port for external blob storage.

use async_trait::async_trait;

/// Errors raised by blob store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlobStoreError {
    /// The store refused the upload.
    #[error("blob upload rejected: {message}")]
    Upload { message: String },
    /// The store could not be reached or answered malformed data.
    #[error("blob store transport failed: {message}")]
    Transport { message: String },
}

impl BlobStoreError {
    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

/// Port storing an opaque byte payload under a name, yielding a public URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload the payload and return its public URL.
    async fn put(&self, file_name: &str, bytes: &[u8]) -> Result<String, BlobStoreError>;
}

/// Fixture implementation returning a deterministic URL per file name.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBlobStore;

#[async_trait]
impl BlobStore for FixtureBlobStore {
    async fn put(&self, file_name: &str, _bytes: &[u8]) -> Result<String, BlobStoreError> {
        Ok(format!("https://blob.invalid/{file_name}"))
    }
}
