//! Port for donation persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Donation, DonationDecision, DonationStatus, EmailAddress, NewDonation};

/// Errors raised by donation repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DonationRepositoryError {
    /// Repository connection could not be established.
    #[error("donation repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("donation repository query failed: {message}")]
    Query { message: String },
}

impl DonationRepositoryError {
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

/// Result of applying an admin decision at the store boundary.
///
/// The check-and-set runs under the store's write lock so two concurrent
/// decisions on the same donation cannot both apply.
#[derive(Debug, Clone, PartialEq)]
pub enum DecisionOutcome {
    /// The donation was pending and the decision was recorded.
    Applied(Donation),
    /// No donation with the given id exists.
    NotFound,
    /// The donation already reached a terminal status; nothing changed.
    AlreadyDecided(DonationStatus),
}

/// Port for writing and reading donation records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonationRepository: Send + Sync {
    /// Persist a new pending donation, generating its id and timestamp.
    async fn insert(&self, donation: NewDonation) -> Result<Donation, DonationRepositoryError>;

    /// Find a donation by id.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Donation>, DonationRepositoryError>;

    /// All donations, newest first.
    async fn list_all(&self) -> Result<Vec<Donation>, DonationRepositoryError>;

    /// Donations for one donor email, newest first, regardless of status.
    async fn list_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Vec<Donation>, DonationRepositoryError>;

    /// Atomically apply an admin decision to a pending donation.
    async fn apply_decision(
        &self,
        id: &Uuid,
        decision: DonationDecision,
    ) -> Result<DecisionOutcome, DonationRepositoryError>;

    /// Sum of amounts over approved donations; zero when none exist.
    async fn approved_total(&self) -> Result<f64, DonationRepositoryError>;
}

/// Fixture implementation for tests that do not exercise donation persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDonationRepository;

#[async_trait]
impl DonationRepository for FixtureDonationRepository {
    async fn insert(&self, donation: NewDonation) -> Result<Donation, DonationRepositoryError> {
        Ok(Donation {
            id: Uuid::new_v4(),
            name: donation.name().to_owned(),
            email: donation.email().clone(),
            amount: donation.amount(),
            status: DonationStatus::Pending,
            rejection_reason: None,
            transaction_id: None,
            date: chrono::Utc::now(),
        })
    }

    async fn find_by_id(&self, _id: &Uuid) -> Result<Option<Donation>, DonationRepositoryError> {
        Ok(None)
    }

    async fn list_all(&self) -> Result<Vec<Donation>, DonationRepositoryError> {
        Ok(Vec::new())
    }

    async fn list_by_email(
        &self,
        _email: &EmailAddress,
    ) -> Result<Vec<Donation>, DonationRepositoryError> {
        Ok(Vec::new())
    }

    async fn apply_decision(
        &self,
        _id: &Uuid,
        _decision: DonationDecision,
    ) -> Result<DecisionOutcome, DonationRepositoryError> {
        Ok(DecisionOutcome::NotFound)
    }

    async fn approved_total(&self) -> Result<f64, DonationRepositoryError> {
        Ok(0.0)
    }
}
