//! Patient case data model.
//!
//! A case is a published fundraising request. It is created by an admin with
//! one to five attached images and is immutable after creation; the record is
//! only persisted once every image upload has succeeded.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lower bound on attached images per case.
pub const CASE_IMAGES_MIN: usize = 1;
/// Upper bound on attached images per case.
pub const CASE_IMAGES_MAX: usize = 5;

/// Case publication status.
///
/// Only `Pending` is produced today; the enum is open for a moderation
/// follow-up without a wire-format change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
pub enum CaseStatus {
    /// Newly published, awaiting any further moderation.
    Pending,
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("Pending"),
        }
    }
}

/// Validation errors returned by [`CaseDraft::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseValidationError {
    EmptyPatientName,
    EmptyMedicalCondition,
    NonFiniteRequestedAmount,
    NegativeRequestedAmount,
}

impl fmt::Display for CaseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPatientName => write!(f, "patient name must not be empty"),
            Self::EmptyMedicalCondition => write!(f, "medical condition must not be empty"),
            Self::NonFiniteRequestedAmount => {
                write!(f, "requested amount must be a finite number")
            }
            Self::NegativeRequestedAmount => {
                write!(f, "requested amount must not be negative")
            }
        }
    }
}

impl std::error::Error for CaseValidationError {}

/// Validated case fields, before images are uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseDraft {
    patient_id: Option<String>,
    patient_name: String,
    medical_condition: String,
    description: String,
    requested_amount: f64,
}

impl CaseDraft {
    /// Validate admin-supplied case fields.
    pub fn try_new(
        patient_id: Option<String>,
        patient_name: impl Into<String>,
        medical_condition: impl Into<String>,
        description: impl Into<String>,
        requested_amount: f64,
    ) -> Result<Self, CaseValidationError> {
        let patient_name = patient_name.into().trim().to_owned();
        if patient_name.is_empty() {
            return Err(CaseValidationError::EmptyPatientName);
        }
        let medical_condition = medical_condition.into().trim().to_owned();
        if medical_condition.is_empty() {
            return Err(CaseValidationError::EmptyMedicalCondition);
        }
        if !requested_amount.is_finite() {
            return Err(CaseValidationError::NonFiniteRequestedAmount);
        }
        if requested_amount < 0.0 {
            return Err(CaseValidationError::NegativeRequestedAmount);
        }
        Ok(Self {
            patient_id: patient_id.filter(|id| !id.trim().is_empty()),
            patient_name,
            medical_condition,
            description: description.into(),
            requested_amount,
        })
    }

    /// Optional free-text patient identifier.
    pub fn patient_id(&self) -> Option<&str> {
        self.patient_id.as_deref()
    }

    /// Patient display name.
    pub fn patient_name(&self) -> &str {
        self.patient_name.as_str()
    }

    /// Medical condition summary.
    pub fn medical_condition(&self) -> &str {
        self.medical_condition.as_str()
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Requested amount; finite and non-negative.
    pub fn requested_amount(&self) -> f64 {
        self.requested_amount
    }
}

/// An image file attached to a case publication request.
///
/// The bytes are handed to the blob collaborator; only the resulting URL is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// File name forwarded to blob storage.
    pub file_name: String,
    /// Raw image payload.
    pub bytes: Vec<u8>,
}

/// A stored patient case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// Store-generated identifier.
    pub id: Uuid,
    /// Optional free-text patient identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    /// Patient display name.
    pub patient_name: String,
    /// Medical condition summary.
    pub medical_condition: String,
    /// Free-text description.
    pub description: String,
    /// Requested amount.
    pub requested_amount: f64,
    /// Public image URLs, in the order the images were submitted.
    pub images: Vec<String>,
    /// Publication status.
    pub status: CaseStatus,
    /// Creation timestamp.
    pub date_added: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "fracture", 100.0, CaseValidationError::EmptyPatientName)]
    #[case("Ravi", "  ", 100.0, CaseValidationError::EmptyMedicalCondition)]
    #[case("Ravi", "fracture", f64::NAN, CaseValidationError::NonFiniteRequestedAmount)]
    #[case("Ravi", "fracture", -1.0, CaseValidationError::NegativeRequestedAmount)]
    fn invalid_drafts_are_rejected(
        #[case] patient_name: &str,
        #[case] condition: &str,
        #[case] amount: f64,
        #[case] expected: CaseValidationError,
    ) {
        let err = CaseDraft::try_new(None, patient_name, condition, "", amount)
            .expect_err("invalid draft");
        assert_eq!(err, expected);
    }

    #[test]
    fn zero_requested_amount_is_allowed() {
        let draft = CaseDraft::try_new(None, "Ravi", "fracture", "desc", 0.0).expect("valid");
        assert_eq!(draft.requested_amount(), 0.0);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("  ".to_owned()), None)]
    #[case(Some("P-42".to_owned()), Some("P-42"))]
    fn blank_patient_ids_collapse_to_none(
        #[case] patient_id: Option<String>,
        #[case] expected: Option<&str>,
    ) {
        let draft =
            CaseDraft::try_new(patient_id, "Ravi", "fracture", "desc", 100.0).expect("valid");
        assert_eq!(draft.patient_id(), expected);
    }
}
