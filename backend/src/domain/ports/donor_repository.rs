//! Port for donator persistence.

use async_trait::async_trait;

use crate::domain::{Donator, DonorProfile, EmailAddress};

/// Errors raised by donator repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DonorRepositoryError {
    /// Repository connection could not be established.
    #[error("donator repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("donator repository query failed: {message}")]
    Query { message: String },
}

impl DonorRepositoryError {
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

/// Port for donator reads and the natural-key upsert.
///
/// `find_or_create` is a single atomic operation at the store boundary so
/// concurrent registrations of the same email cannot race a separate read
/// and write into creating duplicates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonorRepository: Send + Sync {
    /// Return the existing donator for the profile's email, or create one
    /// from the profile. The flag is `true` when a record was created.
    async fn find_or_create(
        &self,
        profile: DonorProfile,
    ) -> Result<(Donator, bool), DonorRepositoryError>;

    /// Find a donator by email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Donator>, DonorRepositoryError>;

    /// Total number of registered donators.
    async fn count(&self) -> Result<u64, DonorRepositoryError>;
}

/// Fixture implementation for tests that do not exercise donator persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDonorRepository;

#[async_trait]
impl DonorRepository for FixtureDonorRepository {
    async fn find_or_create(
        &self,
        profile: DonorProfile,
    ) -> Result<(Donator, bool), DonorRepositoryError> {
        Ok((
            Donator {
                id: uuid::Uuid::new_v4(),
                subject: profile.subject,
                name: profile.name,
                email: profile.email,
                profile_pic: profile.picture,
                registration_date: chrono::Utc::now(),
            },
            true,
        ))
    }

    async fn find_by_email(
        &self,
        _email: &EmailAddress,
    ) -> Result<Option<Donator>, DonorRepositoryError> {
        Ok(None)
    }

    async fn count(&self) -> Result<u64, DonorRepositoryError> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_find_or_create_reports_created() {
        let repo = FixtureDonorRepository;
        let profile = DonorProfile {
            subject: "sub-1".to_owned(),
            name: "A".to_owned(),
            email: EmailAddress::new("a@x.com").expect("valid email"),
            picture: None,
        };
        let (donator, created) = repo.find_or_create(profile).await.expect("fixture upsert");
        assert!(created);
        assert_eq!(donator.email.as_str(), "a@x.com");
    }

    #[rstest]
    fn query_error_formats_message() {
        let err = DonorRepositoryError::query("duplicate key");
        assert!(err.to_string().contains("duplicate key"));
    }
}
