//! Driving port for donor registration.

use async_trait::async_trait;

use crate::domain::{Donator, Error};

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationOutcome {
    /// The donator matching the verified email.
    pub donator: Donator,
    /// `true` when the donator existed before this call.
    pub already_registered: bool,
}

/// Driving port performing verified, idempotent registration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonorIdentity: Send + Sync {
    /// Verify the provider token and find-or-create the donator.
    async fn register_or_fetch(&self, token: String) -> Result<RegistrationOutcome, Error>;
}
