//! Driving port for case publication.

use async_trait::async_trait;

use crate::domain::{Case, CaseDraft, Error, ImageUpload};

/// Driving port covering publication and listing of patient cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CasePublication: Send + Sync {
    /// Upload the images, then persist the case; all-or-nothing.
    async fn publish(&self, draft: CaseDraft, images: Vec<ImageUpload>) -> Result<Case, Error>;

    /// All cases, newest first. Serves both the admin and public reads.
    async fn list_all(&self) -> Result<Vec<Case>, Error>;
}
