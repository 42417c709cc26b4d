//! Aggregation reporter.
//!
//! Implements the [`StatsReporter`] driving port. Totals are recomputed from
//! the store on every call; there is no cache.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    CaseRepository, DonationRepository, DonorRepository, PublicStats, StatsReporter,
};
use crate::domain::Error;

/// Stats service reading across the three entity stores.
#[derive(Clone)]
pub struct StatsService<D, C, N> {
    donations: Arc<D>,
    cases: Arc<C>,
    donators: Arc<N>,
}

impl<D, C, N> StatsService<D, C, N> {
    /// Create the service from the three repositories.
    pub fn new(donations: Arc<D>, cases: Arc<C>, donators: Arc<N>) -> Self {
        Self {
            donations,
            cases,
            donators,
        }
    }
}

#[async_trait]
impl<D, C, N> StatsReporter for StatsService<D, C, N>
where
    D: DonationRepository,
    C: CaseRepository,
    N: DonorRepository,
{
    async fn public_stats(&self) -> Result<PublicStats, Error> {
        let total_donations = self
            .donations
            .approved_total()
            .await
            .map_err(|err| Error::internal(format!("donation totals unavailable: {err}")))?;
        let total_donators = self
            .donators
            .count()
            .await
            .map_err(|err| Error::internal(format!("donator count unavailable: {err}")))?;
        let patients_helped = self
            .cases
            .count()
            .await
            .map_err(|err| Error::internal(format!("case count unavailable: {err}")))?;

        Ok(PublicStats {
            total_donations,
            total_donators,
            patients_helped,
        })
    }
}

#[cfg(test)]
#[path = "stats_service_tests.rs"]
mod tests;
