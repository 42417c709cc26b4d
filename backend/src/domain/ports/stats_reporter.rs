//! Driving port for public aggregate statistics.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;

/// Flat numeric summary derived from current store contents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicStats {
    /// Sum of amounts over approved donations.
    pub total_donations: f64,
    /// Count of all registered donators.
    pub total_donators: u64,
    /// Count of all published cases.
    pub patients_helped: u64,
}

/// Driving port recomputing the public summary on every call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsReporter: Send + Sync {
    /// Compute current totals from the store; never cached.
    async fn public_stats(&self) -> Result<PublicStats, Error>;
}
