//! Test helpers for HTTP handler tests.
//!
//! Handlers only need the ports they exercise; everything else defaults to
//! the real services wired over fixture adapters.

use std::sync::Arc;

use crate::domain::ports::{
    CasePublication, ChatProxy, DonationLifecycle, DonorIdentity, FixtureBlobStore,
    FixtureCaseRepository, FixtureChatCompletion, FixtureDonationRepository,
    FixtureDonorRepository, FixtureIdentityVerifier, FixtureQrRenderer, StatsReporter,
};
use crate::domain::{
    CaseService, ChatService, DonationService, DonorService, StatsService, UpiAccount,
};
use crate::inbound::http::state::{AdminCredentials, HttpState};

/// Ports a test wants to override; the rest fall back to fixtures.
#[derive(Default)]
pub struct TestPorts {
    pub donations: Option<Arc<dyn DonationLifecycle>>,
    pub cases: Option<Arc<dyn CasePublication>>,
    pub donors: Option<Arc<dyn DonorIdentity>>,
    pub stats: Option<Arc<dyn StatsReporter>>,
    pub chat: Option<Arc<dyn ChatProxy>>,
    pub admin: Option<AdminCredentials>,
}

fn fixture_upi() -> UpiAccount {
    UpiAccount {
        vpa: "carefund@upi".to_owned(),
        fallback_payee_name: "CareFund".to_owned(),
    }
}

/// Admin pair used by handler tests.
pub fn test_admin() -> AdminCredentials {
    AdminCredentials {
        username: "carefund".to_owned(),
        password: "test-password".to_owned(),
    }
}

/// Build handler state, overriding only the supplied ports.
pub fn state_with(ports: TestPorts) -> HttpState {
    HttpState {
        donations: ports.donations.unwrap_or_else(|| {
            Arc::new(DonationService::new(
                Arc::new(FixtureDonationRepository),
                Arc::new(FixtureQrRenderer),
                fixture_upi(),
            ))
        }),
        cases: ports.cases.unwrap_or_else(|| {
            Arc::new(CaseService::new(
                Arc::new(FixtureCaseRepository),
                Arc::new(FixtureBlobStore),
            ))
        }),
        donors: ports.donors.unwrap_or_else(|| {
            Arc::new(DonorService::new(
                Arc::new(FixtureDonorRepository),
                Arc::new(FixtureIdentityVerifier),
            ))
        }),
        stats: ports.stats.unwrap_or_else(|| {
            Arc::new(StatsService::new(
                Arc::new(FixtureDonationRepository),
                Arc::new(FixtureCaseRepository),
                Arc::new(FixtureDonorRepository),
            ))
        }),
        chat: ports
            .chat
            .unwrap_or_else(|| Arc::new(ChatService::new(Arc::new(FixtureChatCompletion)))),
        admin: ports.admin.unwrap_or_else(test_admin),
    }
}
