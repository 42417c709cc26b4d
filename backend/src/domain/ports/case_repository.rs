//! Port for patient case persistence.

use async_trait::async_trait;

use crate::domain::{Case, CaseDraft, CaseStatus};

/// Errors raised by case repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseRepositoryError {
    /// Repository connection could not be established.
    #[error("case repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("case repository query failed: {message}")]
    Query { message: String },
}

impl CaseRepositoryError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for writing and reading cases.
///
/// Cases have no update or delete path; the port is insert-and-list only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// Persist a case with its uploaded image URLs, generating id and
    /// timestamp.
    async fn insert(
        &self,
        draft: CaseDraft,
        image_urls: Vec<String>,
    ) -> Result<Case, CaseRepositoryError>;

    /// All cases, newest first.
    async fn list_all(&self) -> Result<Vec<Case>, CaseRepositoryError>;

    /// Total number of cases.
    async fn count(&self) -> Result<u64, CaseRepositoryError>;
}

/// Fixture implementation for tests that do not exercise case persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCaseRepository;

#[async_trait]
impl CaseRepository for FixtureCaseRepository {
    async fn insert(
        &self,
        draft: CaseDraft,
        image_urls: Vec<String>,
    ) -> Result<Case, CaseRepositoryError> {
        Ok(Case {
            id: uuid::Uuid::new_v4(),
            patient_id: draft.patient_id().map(ToOwned::to_owned),
            patient_name: draft.patient_name().to_owned(),
            medical_condition: draft.medical_condition().to_owned(),
            description: draft.description().to_owned(),
            requested_amount: draft.requested_amount(),
            images: image_urls,
            status: CaseStatus::Pending,
            date_added: chrono::Utc::now(),
        })
    }

    async fn list_all(&self) -> Result<Vec<Case>, CaseRepositoryError> {
        Ok(Vec::new())
    }

    async fn count(&self) -> Result<u64, CaseRepositoryError> {
        Ok(0)
    }
}
