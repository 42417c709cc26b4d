//! Donation lifecycle service.
//!
//! Implements the [`DonationLifecycle`] driving port over a donation
//! repository and the QR collaborator. The QR image is rendered before the
//! donation is persisted so a render failure cannot leave an orphaned
//! pending record behind.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use crate::domain::ports::{
    ApproveDonationRequest, DecisionOutcome, DonationLifecycle, DonationRepository,
    DonationRepositoryError, QrRenderer, RejectDonationRequest, SubmitDonationRequest,
    SubmitDonationResponse,
};
use crate::domain::{
    Donation, DonationDecision, DonationValidationError, EmailAddress, Error, NewDonation,
    UpiAccount,
};

fn map_repository_error(error: DonationRepositoryError) -> Error {
    match error {
        DonationRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("donation store unavailable: {message}"))
        }
        DonationRepositoryError::Query { message } => {
            Error::internal(format!("donation store error: {message}"))
        }
    }
}

fn map_validation_error(error: DonationValidationError) -> Error {
    let (field, code) = match &error {
        DonationValidationError::InvalidEmail(_) => ("email", "invalid_email"),
        DonationValidationError::NonFiniteAmount => ("amount", "non_finite_amount"),
        DonationValidationError::NonPositiveAmount => ("amount", "non_positive_amount"),
    };
    Error::invalid_request(error.to_string())
        .with_details(json!({ "field": field, "code": code }))
}

fn parse_donation_id(raw: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        Error::invalid_request("donation id must be a valid UUID")
            .with_details(json!({ "field": "id", "value": raw, "code": "invalid_id" }))
    })
}

/// Donation lifecycle service wiring the repository, QR collaborator, and
/// the configured UPI payee.
#[derive(Clone)]
pub struct DonationService<R, Q> {
    donations: Arc<R>,
    qr: Arc<Q>,
    upi: UpiAccount,
}

impl<R, Q> DonationService<R, Q> {
    /// Create the service from its collaborators.
    pub fn new(donations: Arc<R>, qr: Arc<Q>, upi: UpiAccount) -> Self {
        Self { donations, qr, upi }
    }
}

impl<R, Q> DonationService<R, Q>
where
    R: DonationRepository,
    Q: QrRenderer,
{
    async fn decide(&self, id: &str, decision: DonationDecision) -> Result<Donation, Error> {
        let id = parse_donation_id(id)?;
        let outcome = self
            .donations
            .apply_decision(&id, decision)
            .await
            .map_err(map_repository_error)?;
        match outcome {
            DecisionOutcome::Applied(donation) => Ok(donation),
            DecisionOutcome::NotFound => Err(Error::not_found(format!(
                "donation {id} not found"
            ))),
            DecisionOutcome::AlreadyDecided(status) => {
                Err(Error::conflict("donation already decided").with_details(json!({
                    "code": "already_decided",
                    "status": status.to_string(),
                })))
            }
        }
    }
}

#[async_trait]
impl<R, Q> DonationLifecycle for DonationService<R, Q>
where
    R: DonationRepository,
    Q: QrRenderer,
{
    async fn submit(
        &self,
        request: SubmitDonationRequest,
    ) -> Result<SubmitDonationResponse, Error> {
        let amount = request.amount.ok_or_else(|| {
            Error::invalid_request("amount is required")
                .with_details(json!({ "field": "amount", "code": "missing_amount" }))
        })?;
        let submission = NewDonation::try_new(request.name, request.email.as_str(), amount)
            .map_err(map_validation_error)?;

        let upi_link = self.upi.payment_link(submission.name(), submission.amount());
        // Render before persisting: a renderer outage must not strand a
        // pending record the donor never saw.
        let qr_png = self
            .qr
            .render(upi_link.as_str())
            .await
            .map_err(|err| Error::internal(format!("qr rendering failed: {err}")))?;

        let donation = self
            .donations
            .insert(submission)
            .await
            .map_err(map_repository_error)?;
        tracing::info!(donation_id = %donation.id, amount = donation.amount, "donation submitted");

        Ok(SubmitDonationResponse {
            donation,
            upi_link,
            qr_png,
        })
    }

    async fn approve(&self, request: ApproveDonationRequest) -> Result<Donation, Error> {
        let donation = self
            .decide(
                request.id.as_str(),
                DonationDecision::Approve {
                    transaction_id: request.transaction_id,
                },
            )
            .await?;
        tracing::info!(donation_id = %donation.id, "donation approved");
        Ok(donation)
    }

    async fn reject(&self, request: RejectDonationRequest) -> Result<Donation, Error> {
        let donation = self
            .decide(
                request.id.as_str(),
                DonationDecision::Reject {
                    reason: request.reason,
                },
            )
            .await?;
        tracing::info!(donation_id = %donation.id, "donation rejected");
        Ok(donation)
    }

    async fn list_by_email(&self, email: String) -> Result<Vec<Donation>, Error> {
        let email = EmailAddress::new(email.as_str()).map_err(|err| {
            Error::invalid_request(format!("invalid donor email: {err}"))
                .with_details(json!({ "field": "email", "code": "invalid_email" }))
        })?;
        self.donations
            .list_by_email(&email)
            .await
            .map_err(map_repository_error)
    }

    async fn list_all(&self) -> Result<Vec<Donation>, Error> {
        self.donations.list_all().await.map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "donation_service_tests.rs"]
mod tests;
