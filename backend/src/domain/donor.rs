//! Donor identity data model.
//!
//! A [`Donator`] is created on first verified registration and is immutable
//! afterwards. The email address is the natural key: the store guarantees at
//! most one donator per address.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned by [`EmailAddress::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    Empty,
    MissingAtSign,
    EmptyLocalPart,
    EmptyDomain,
    ContainsWhitespace,
}

impl fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "email must not be empty"),
            Self::MissingAtSign => write!(f, "email must contain an @ sign"),
            Self::EmptyLocalPart => write!(f, "email local part must not be empty"),
            Self::EmptyDomain => write!(f, "email domain must not be empty"),
            Self::ContainsWhitespace => write!(f, "email must not contain whitespace"),
        }
    }
}

impl std::error::Error for EmailValidationError {}

/// Normalised email address used as the donator natural key.
///
/// Input is trimmed and lowercased so lookups are case-insensitive.
///
/// # Examples
/// ```
/// use carefund_backend::domain::EmailAddress;
///
/// let email = EmailAddress::new(" A@X.COM ").expect("valid email");
/// assert_eq!(email.as_str(), "a@x.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "donor@example.com")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalise an email address.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, EmailValidationError> {
        let normalised = raw.as_ref().trim().to_lowercase();
        if normalised.is_empty() {
            return Err(EmailValidationError::Empty);
        }
        if normalised.chars().any(char::is_whitespace) {
            return Err(EmailValidationError::ContainsWhitespace);
        }
        let Some((local, domain)) = normalised.split_once('@') else {
            return Err(EmailValidationError::MissingAtSign);
        };
        if local.is_empty() {
            return Err(EmailValidationError::EmptyLocalPart);
        }
        if domain.is_empty() {
            return Err(EmailValidationError::EmptyDomain);
        }
        Ok(Self(normalised))
    }

    /// Borrow the normalised address.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Claims returned by the identity provider after verifying a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorProfile {
    /// Provider subject identifier.
    pub subject: String,
    /// Display name reported by the provider.
    pub name: String,
    /// Verified email address.
    pub email: EmailAddress,
    /// Profile picture URL, when the provider supplies one.
    pub picture: Option<String>,
}

/// A registered donor.
///
/// Created once per email and never mutated: a changed provider-side name or
/// picture is not reflected after first registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Donator {
    /// Store-generated identifier.
    pub id: Uuid,
    /// Provider subject identifier.
    pub subject: String,
    /// Display name captured at registration.
    pub name: String,
    /// Natural key; unique across donators.
    pub email: EmailAddress,
    /// Profile picture URL captured at registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    /// Registration timestamp.
    pub registration_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("a@x.com", "a@x.com")]
    #[case(" Donor@Example.COM ", "donor@example.com")]
    fn valid_emails_are_normalised(#[case] raw: &str, #[case] expected: &str) {
        let email = EmailAddress::new(raw).expect("valid email");
        assert_eq!(email.as_str(), expected);
    }

    #[rstest]
    #[case("", EmailValidationError::Empty)]
    #[case("   ", EmailValidationError::Empty)]
    #[case("no-at-sign", EmailValidationError::MissingAtSign)]
    #[case("@x.com", EmailValidationError::EmptyLocalPart)]
    #[case("a@", EmailValidationError::EmptyDomain)]
    #[case("a b@x.com", EmailValidationError::ContainsWhitespace)]
    fn invalid_emails_are_rejected(#[case] raw: &str, #[case] expected: EmailValidationError) {
        let err = EmailAddress::new(raw).expect_err("invalid email");
        assert_eq!(err, expected);
    }

    #[test]
    fn emails_compare_case_insensitively() {
        let lower = EmailAddress::new("a@x.com").expect("valid email");
        let upper = EmailAddress::new("A@X.COM").expect("valid email");
        assert_eq!(lower, upper);
    }

    #[test]
    fn email_serialises_as_plain_string() {
        let email = EmailAddress::new("a@x.com").expect("valid email");
        let value = serde_json::to_value(&email).expect("email serialises");
        assert_eq!(value, serde_json::json!("a@x.com"));
    }
}
