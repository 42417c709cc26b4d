//! Case publication service.
//!
//! Implements the [`CasePublication`] driving port. Image uploads run
//! concurrently against the blob collaborator but are joined positionally,
//! so the stored URL order always matches the submitted image order. Any
//! upload failure aborts the publication before a case is persisted.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::try_join_all;
use serde_json::json;

use crate::domain::ports::{
    BlobStore, CasePublication, CaseRepository, CaseRepositoryError,
};
use crate::domain::{Case, CaseDraft, Error, ImageUpload, CASE_IMAGES_MAX, CASE_IMAGES_MIN};

fn map_repository_error(error: CaseRepositoryError) -> Error {
    match error {
        CaseRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("case store unavailable: {message}"))
        }
        CaseRepositoryError::Query { message } => {
            Error::internal(format!("case store error: {message}"))
        }
    }
}

/// Case publication service wiring the repository and the blob collaborator.
#[derive(Clone)]
pub struct CaseService<R, B> {
    cases: Arc<R>,
    blobs: Arc<B>,
}

impl<R, B> CaseService<R, B> {
    /// Create the service from its collaborators.
    pub fn new(cases: Arc<R>, blobs: Arc<B>) -> Self {
        Self { cases, blobs }
    }
}

#[async_trait]
impl<R, B> CasePublication for CaseService<R, B>
where
    R: CaseRepository,
    B: BlobStore,
{
    async fn publish(&self, draft: CaseDraft, images: Vec<ImageUpload>) -> Result<Case, Error> {
        if images.len() < CASE_IMAGES_MIN || images.len() > CASE_IMAGES_MAX {
            return Err(Error::invalid_request(format!(
                "a case requires between {CASE_IMAGES_MIN} and {CASE_IMAGES_MAX} images"
            ))
            .with_details(json!({
                "field": "images",
                "count": images.len(),
                "code": "image_count_out_of_range",
            })));
        }

        // try_join_all keeps results in input order and resolves on the
        // first failure, giving the all-or-nothing upload boundary.
        let uploads = images
            .iter()
            .map(|image| self.blobs.put(image.file_name.as_str(), &image.bytes));
        let image_urls = try_join_all(uploads)
            .await
            .map_err(|err| Error::internal(format!("image upload failed: {err}")))?;

        let case = self
            .cases
            .insert(draft, image_urls)
            .await
            .map_err(map_repository_error)?;
        tracing::info!(case_id = %case.id, images = case.images.len(), "case published");
        Ok(case)
    }

    async fn list_all(&self) -> Result<Vec<Case>, Error> {
        self.cases.list_all().await.map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "case_service_tests.rs"]
mod tests;
