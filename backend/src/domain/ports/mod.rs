//! Domain ports and supporting types for the hexagonal boundary.

mod blob_store;
mod case_publication;
mod case_repository;
mod chat_completion;
mod chat_proxy;
mod donation_lifecycle;
mod donation_repository;
mod donor_identity;
mod donor_repository;
mod identity_verifier;
mod qr_renderer;
mod stats_reporter;

#[cfg(test)]
pub use blob_store::MockBlobStore;
pub use blob_store::{BlobStore, BlobStoreError, FixtureBlobStore};
#[cfg(test)]
pub use case_publication::MockCasePublication;
pub use case_publication::CasePublication;
#[cfg(test)]
pub use case_repository::MockCaseRepository;
pub use case_repository::{CaseRepository, CaseRepositoryError, FixtureCaseRepository};
#[cfg(test)]
pub use chat_completion::MockChatCompletion;
pub use chat_completion::{ChatCompletion, ChatCompletionError, FixtureChatCompletion};
#[cfg(test)]
pub use chat_proxy::MockChatProxy;
pub use chat_proxy::ChatProxy;
#[cfg(test)]
pub use donation_lifecycle::MockDonationLifecycle;
pub use donation_lifecycle::{
    ApproveDonationRequest, DonationLifecycle, RejectDonationRequest, SubmitDonationRequest,
    SubmitDonationResponse,
};
#[cfg(test)]
pub use donation_repository::MockDonationRepository;
pub use donation_repository::{
    DecisionOutcome, DonationRepository, DonationRepositoryError, FixtureDonationRepository,
};
#[cfg(test)]
pub use donor_identity::MockDonorIdentity;
pub use donor_identity::{DonorIdentity, RegistrationOutcome};
#[cfg(test)]
pub use donor_repository::MockDonorRepository;
pub use donor_repository::{DonorRepository, DonorRepositoryError, FixtureDonorRepository};
#[cfg(test)]
pub use identity_verifier::MockIdentityVerifier;
pub use identity_verifier::{FixtureIdentityVerifier, IdentityVerifier, IdentityVerifierError};
#[cfg(test)]
pub use qr_renderer::MockQrRenderer;
pub use qr_renderer::{FixtureQrRenderer, QrRenderer, QrRendererError};
#[cfg(test)]
pub use stats_reporter::MockStatsReporter;
pub use stats_reporter::{PublicStats, StatsReporter};
