//! Port for QR image rendering.

use async_trait::async_trait;

/// Errors raised by QR renderer adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QrRendererError {
    /// The renderer rejected the payload.
    #[error("qr render rejected: {message}")]
    Render { message: String },
    /// The renderer could not be reached.
    #[error("qr renderer transport failed: {message}")]
    Transport { message: String },
}

impl QrRendererError {
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

/// Port turning a URI string into a renderable PNG image.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QrRenderer: Send + Sync {
    /// Render the URI as PNG bytes.
    async fn render(&self, uri: &str) -> Result<Vec<u8>, QrRendererError>;
}

/// Fixture implementation returning a tiny placeholder payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureQrRenderer;

#[async_trait]
impl QrRenderer for FixtureQrRenderer {
    async fn render(&self, _uri: &str) -> Result<Vec<u8>, QrRendererError> {
        Ok(b"png".to_vec())
    }
}
