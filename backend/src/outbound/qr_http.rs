//! Reqwest-backed QR renderer adapter.
//!
//! Calls an external QR render service and returns the PNG bytes verbatim;
//! the inbound layer decides how to embed them.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::domain::ports::{QrRenderer, QrRendererError};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const RENDER_SIZE: &str = "320x320";

/// QR renderer adapter performing HTTP GET requests against one endpoint.
pub struct HttpQrRenderer {
    client: Client,
    endpoint: Url,
}

impl HttpQrRenderer {
    /// Build an adapter for the given render endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl QrRenderer for HttpQrRenderer {
    async fn render(&self, uri: &str) -> Result<Vec<u8>, QrRendererError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("size", RENDER_SIZE), ("data", uri)])
            .send()
            .await
            .map_err(|err| QrRendererError::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QrRendererError::render(format!(
                "renderer answered {status}"
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| QrRendererError::transport(err.to_string()))?;
        if bytes.is_empty() {
            return Err(QrRendererError::render("renderer returned an empty body"));
        }
        Ok(bytes.to_vec())
    }
}
