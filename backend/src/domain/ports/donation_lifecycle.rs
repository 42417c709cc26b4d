//! Driving port for the donation lifecycle.

use async_trait::async_trait;

use crate::domain::{Donation, Error};

/// Donor-facing submission payload.
///
/// Fields arrive as the client sent them; the service validates shape and
/// presence.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitDonationRequest {
    /// Donor display name.
    pub name: String,
    /// Donor email.
    pub email: String,
    /// Donation amount; `None` when the client omitted the field.
    pub amount: Option<f64>,
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitDonationResponse {
    /// The stored pending donation.
    pub donation: Donation,
    /// UPI deep link for the payment intent.
    pub upi_link: String,
    /// QR rendering of the deep link, as PNG bytes.
    pub qr_png: Vec<u8>,
}

/// Admin approval payload. The id arrives as raw text and is parsed by the
/// service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveDonationRequest {
    pub id: String,
    pub transaction_id: String,
}

/// Admin rejection payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectDonationRequest {
    pub id: String,
    pub reason: String,
}

/// Driving port covering submission, admin decisions, and listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonationLifecycle: Send + Sync {
    /// Record a pending donation and produce its payment rendering.
    async fn submit(&self, request: SubmitDonationRequest)
        -> Result<SubmitDonationResponse, Error>;

    /// Approve a pending donation, storing the transaction reference.
    async fn approve(&self, request: ApproveDonationRequest) -> Result<Donation, Error>;

    /// Reject a pending donation, storing the reason.
    async fn reject(&self, request: RejectDonationRequest) -> Result<Donation, Error>;

    /// Donations for one donor, newest first.
    async fn list_by_email(&self, email: String) -> Result<Vec<Donation>, Error>;

    /// All donations for the admin view, newest first.
    async fn list_all(&self) -> Result<Vec<Donation>, Error>;
}
