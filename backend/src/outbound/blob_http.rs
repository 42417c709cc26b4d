//! Reqwest-backed blob store adapter.
//!
//! Uploads payloads to a Vercel-style blob endpoint with a bearer token and
//! decodes the public URL from the JSON response.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::domain::ports::{BlobStore, BlobStoreError};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Upload response subset; only the public URL is persisted downstream.
#[derive(Debug, Deserialize)]
struct BlobUploadDto {
    url: String,
}

/// Blob store adapter performing authenticated HTTP uploads.
pub struct HttpBlobStore {
    client: Client,
    endpoint: Url,
    token: String,
}

impl HttpBlobStore {
    /// Build an adapter for the given endpoint and read-write token.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, token: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(endpoint, token, DEFAULT_TIMEOUT)
    }

    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(
        endpoint: Url,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            token: token.into(),
        })
    }

    fn upload_url(&self, file_name: &str) -> Result<Url, BlobStoreError> {
        self.endpoint
            .join(file_name)
            .map_err(|err| BlobStoreError::upload(format!("invalid file name: {err}")))
    }
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn put(&self, file_name: &str, bytes: &[u8]) -> Result<String, BlobStoreError> {
        let url = self.upload_url(file_name)?;
        let response = self
            .client
            .put(url)
            .bearer_auth(self.token.as_str())
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|err| BlobStoreError::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BlobStoreError::upload(format!(
                "store answered {status}: {body}"
            )));
        }

        let uploaded: BlobUploadDto = response
            .json()
            .await
            .map_err(|err| BlobStoreError::transport(err.to_string()))?;
        tracing::debug!(file_name, url = %uploaded.url, "blob uploaded");
        Ok(uploaded.url)
    }
}
