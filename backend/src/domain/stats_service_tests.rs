//! Tests for the aggregation reporter.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{
    DonationRepositoryError, MockCaseRepository, MockDonationRepository, MockDonorRepository,
};
use crate::domain::ErrorCode;

#[tokio::test]
async fn stats_combine_the_three_store_reads() {
    let mut donations = MockDonationRepository::new();
    donations
        .expect_approved_total()
        .times(1)
        .returning(|| Ok(1500.0));
    let mut cases = MockCaseRepository::new();
    cases.expect_count().times(1).returning(|| Ok(3));
    let mut donators = MockDonorRepository::new();
    donators.expect_count().times(1).returning(|| Ok(7));

    let service = StatsService::new(Arc::new(donations), Arc::new(cases), Arc::new(donators));
    let stats = service.public_stats().await.expect("stats computed");

    assert_eq!(stats.total_donations, 1500.0);
    assert_eq!(stats.total_donators, 7);
    assert_eq!(stats.patients_helped, 3);
}

#[tokio::test]
async fn empty_stores_report_zeroes() {
    let mut donations = MockDonationRepository::new();
    donations.expect_approved_total().returning(|| Ok(0.0));
    let mut cases = MockCaseRepository::new();
    cases.expect_count().returning(|| Ok(0));
    let mut donators = MockDonorRepository::new();
    donators.expect_count().returning(|| Ok(0));

    let service = StatsService::new(Arc::new(donations), Arc::new(cases), Arc::new(donators));
    let stats = service.public_stats().await.expect("stats computed");

    assert_eq!(stats.total_donations, 0.0);
    assert_eq!(stats.total_donators, 0);
    assert_eq!(stats.patients_helped, 0);
}

#[tokio::test]
async fn a_failing_store_read_is_internal() {
    let mut donations = MockDonationRepository::new();
    donations
        .expect_approved_total()
        .returning(|| Err(DonationRepositoryError::query("lock poisoned")));

    let service = StatsService::new(
        Arc::new(donations),
        Arc::new(MockCaseRepository::new()),
        Arc::new(MockDonorRepository::new()),
    );
    let error = service.public_stats().await.expect_err("failure surfaces");

    assert_eq!(error.code(), ErrorCode::InternalError);
}
