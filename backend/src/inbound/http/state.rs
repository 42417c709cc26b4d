//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CasePublication, ChatProxy, DonationLifecycle, DonorIdentity, StatsReporter};

/// Static admin credential pair checked by `POST /admin/login`.
///
/// Deliberately not a real authentication scheme: there is exactly one
/// admin and no session is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    /// Whether the supplied pair matches the configured one.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub donations: Arc<dyn DonationLifecycle>,
    pub cases: Arc<dyn CasePublication>,
    pub donors: Arc<dyn DonorIdentity>,
    pub stats: Arc<dyn StatsReporter>,
    pub chat: Arc<dyn ChatProxy>,
    pub admin: AdminCredentials,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    #[test]
    fn credentials_match_exactly() {
        let admin = AdminCredentials {
            username: "carefund".to_owned(),
            password: "secret".to_owned(),
        };
        assert!(admin.matches("carefund", "secret"));
        assert!(!admin.matches("carefund", "Secret"));
        assert!(!admin.matches("someone", "secret"));
    }
}
