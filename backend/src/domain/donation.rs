//! Donation data model and status lifecycle.
//!
//! A donation records a donor-initiated payment intent. It starts `Pending`
//! and is moved exactly once to `Approved` or `Rejected` by an admin
//! decision; both outcomes are terminal.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::donor::{EmailAddress, EmailValidationError};

/// Donation lifecycle status.
///
/// Serialised capitalised to match the wire format persisted by earlier
/// revisions of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DonationStatus {
    /// Submitted, awaiting an admin decision.
    Pending,
    /// Approved with a transaction reference. Terminal.
    Approved,
    /// Rejected with a reason. Terminal.
    Rejected,
}

impl DonationStatus {
    /// Whether the status admits no further transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        };
        f.write_str(label)
    }
}

/// Validation errors returned by [`NewDonation::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonationValidationError {
    InvalidEmail(EmailValidationError),
    NonFiniteAmount,
    NonPositiveAmount,
}

impl fmt::Display for DonationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(err) => write!(f, "invalid donor email: {err}"),
            Self::NonFiniteAmount => write!(f, "amount must be a finite number"),
            Self::NonPositiveAmount => write!(f, "amount must be greater than zero"),
        }
    }
}

impl std::error::Error for DonationValidationError {}

/// Validated input for creating a donation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonation {
    name: String,
    email: EmailAddress,
    amount: f64,
}

impl NewDonation {
    /// Validate donor-supplied submission fields.
    ///
    /// The amount is donor supplied and unverified against any real payment;
    /// only its shape is checked here. The name may be blank: the UPI link
    /// substitutes the configured payee name for display.
    pub fn try_new(
        name: impl Into<String>,
        email: impl AsRef<str>,
        amount: f64,
    ) -> Result<Self, DonationValidationError> {
        let name = name.into().trim().to_owned();
        let email = EmailAddress::new(email).map_err(DonationValidationError::InvalidEmail)?;
        if !amount.is_finite() {
            return Err(DonationValidationError::NonFiniteAmount);
        }
        if amount <= 0.0 {
            return Err(DonationValidationError::NonPositiveAmount);
        }
        Ok(Self {
            name,
            email,
            amount,
        })
    }

    /// Donor display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Donor email (soft reference, not a foreign key).
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Donation amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Admin decision applied to a pending donation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonationDecision {
    /// Approve with the reconciled transaction reference.
    Approve { transaction_id: String },
    /// Reject with a reason shown to the donor.
    Reject { reason: String },
}

/// A stored donation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    /// Store-generated identifier.
    pub id: Uuid,
    /// Donor display name as submitted.
    pub name: String,
    /// Donor email (soft reference to a donator).
    pub email: EmailAddress,
    /// Donor-supplied amount, unverified.
    pub amount: f64,
    /// Lifecycle status.
    pub status: DonationStatus,
    /// Reason recorded on rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// Transaction reference recorded on approval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Submission timestamp.
    pub date: DateTime<Utc>,
}

impl Donation {
    /// Apply a decision to this record, assuming the caller checked that the
    /// status is still [`DonationStatus::Pending`].
    pub fn with_decision(mut self, decision: DonationDecision) -> Self {
        match decision {
            DonationDecision::Approve { transaction_id } => {
                self.status = DonationStatus::Approved;
                self.transaction_id = Some(transaction_id);
            }
            DonationDecision::Reject { reason } => {
                self.status = DonationStatus::Rejected;
                self.rejection_reason = Some(reason);
            }
        }
        self
    }
}
