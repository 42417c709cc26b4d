//! Donor identity service.
//!
//! Implements the [`DonorIdentity`] driving port: token verification is
//! delegated to the identity collaborator, then the donator is resolved with
//! an atomic find-or-create so repeat registration is idempotent.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    DonorIdentity, DonorRepository, DonorRepositoryError, IdentityVerifier, IdentityVerifierError,
    RegistrationOutcome,
};
use crate::domain::Error;

fn map_repository_error(error: DonorRepositoryError) -> Error {
    match error {
        DonorRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("donator store unavailable: {message}"))
        }
        DonorRepositoryError::Query { message } => {
            Error::internal(format!("donator store error: {message}"))
        }
    }
}

fn map_verifier_error(error: IdentityVerifierError) -> Error {
    match error {
        IdentityVerifierError::InvalidToken { message } => {
            tracing::warn!(%message, "identity token rejected");
            Error::unauthorized("Authentication failed")
        }
        IdentityVerifierError::Transport { message } => {
            Error::internal(format!("identity provider error: {message}"))
        }
    }
}

/// Donor identity service wiring the verifier and the donator repository.
#[derive(Clone)]
pub struct DonorService<R, V> {
    donators: Arc<R>,
    verifier: Arc<V>,
}

impl<R, V> DonorService<R, V> {
    /// Create the service from its collaborators.
    pub fn new(donators: Arc<R>, verifier: Arc<V>) -> Self {
        Self { donators, verifier }
    }
}

#[async_trait]
impl<R, V> DonorIdentity for DonorService<R, V>
where
    R: DonorRepository,
    V: IdentityVerifier,
{
    async fn register_or_fetch(&self, token: String) -> Result<RegistrationOutcome, Error> {
        let profile = self
            .verifier
            .verify(token.as_str())
            .await
            .map_err(map_verifier_error)?;

        let (donator, created) = self
            .donators
            .find_or_create(profile)
            .await
            .map_err(map_repository_error)?;
        if created {
            tracing::info!(donator_id = %donator.id, "donator registered");
        }

        Ok(RegistrationOutcome {
            donator,
            already_registered: !created,
        })
    }
}

#[cfg(test)]
#[path = "donor_service_tests.rs"]
mod tests;
