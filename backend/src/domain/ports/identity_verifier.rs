//! Port for delegated identity-token verification.

use async_trait::async_trait;

use crate::domain::DonorProfile;

/// Errors raised by identity verifier adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityVerifierError {
    /// The token failed signature, audience, or claim checks.
    #[error("identity token rejected: {message}")]
    InvalidToken { message: String },
    /// The provider could not be reached or answered malformed data.
    #[error("identity provider transport failed: {message}")]
    Transport { message: String },
}

impl IdentityVerifierError {
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::InvalidToken {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

/// Port verifying an opaque provider token into donor claims.
///
/// Signature and audience checks are the adapter's responsibility; the
/// domain only sees verified claims.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify the token and return the claims it carries.
    async fn verify(&self, token: &str) -> Result<DonorProfile, IdentityVerifierError>;
}

/// Fixture implementation that rejects every token.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIdentityVerifier;

#[async_trait]
impl IdentityVerifier for FixtureIdentityVerifier {
    async fn verify(&self, _token: &str) -> Result<DonorProfile, IdentityVerifierError> {
        Err(IdentityVerifierError::invalid_token(
            "fixture verifier accepts no tokens",
        ))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    #[tokio::test]
    async fn fixture_rejects_all_tokens() {
        let verifier = FixtureIdentityVerifier;
        let err = verifier.verify("anything").await.expect_err("rejected");
        assert!(matches!(err, IdentityVerifierError::InvalidToken { .. }));
    }
}
