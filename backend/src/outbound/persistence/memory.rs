//! In-memory repository adapters.
//!
//! The shipping store for this service: three entity collections guarded by
//! `tokio::sync::RwLock`. Every mutation holds the write lock for its whole
//! read-modify-write, which makes `find_or_create` and `apply_decision`
//! atomic without any optimistic concurrency machinery. The same adapters
//! double as the test fakes for the domain services.

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{
    CaseRepository, CaseRepositoryError, DecisionOutcome, DonationRepository,
    DonationRepositoryError, DonorRepository, DonorRepositoryError,
};
use crate::domain::{
    Case, CaseDraft, CaseStatus, Donation, DonationDecision, DonationStatus, Donator,
    DonorProfile, EmailAddress, NewDonation,
};

/// Return records newest first.
///
/// Records are stored in insertion order. Reversing before the stable sort
/// makes insertion order the tie-breaker for identical timestamps.
fn newest_first<T, K>(records: &[T], key: impl Fn(&T) -> K) -> Vec<T>
where
    T: Clone,
    K: Ord,
{
    let mut sorted: Vec<T> = records.to_vec();
    sorted.reverse();
    sorted.sort_by_key(|record| std::cmp::Reverse(key(record)));
    sorted
}

/// Donation collection held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryDonationRepository {
    records: RwLock<Vec<Donation>>,
}

impl InMemoryDonationRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DonationRepository for InMemoryDonationRepository {
    async fn insert(&self, donation: NewDonation) -> Result<Donation, DonationRepositoryError> {
        let record = Donation {
            id: Uuid::new_v4(),
            name: donation.name().to_owned(),
            email: donation.email().clone(),
            amount: donation.amount(),
            status: DonationStatus::Pending,
            rejection_reason: None,
            transaction_id: None,
            date: Utc::now(),
        };
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Donation>, DonationRepositoryError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| record.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Donation>, DonationRepositoryError> {
        let records = self.records.read().await;
        Ok(newest_first(&records, |record| record.date))
    }

    async fn list_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Vec<Donation>, DonationRepositoryError> {
        let records = self.records.read().await;
        let matching: Vec<Donation> = records
            .iter()
            .filter(|record| record.email == *email)
            .cloned()
            .collect();
        Ok(newest_first(&matching, |record| record.date))
    }

    async fn apply_decision(
        &self,
        id: &Uuid,
        decision: DonationDecision,
    ) -> Result<DecisionOutcome, DonationRepositoryError> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|record| record.id == *id) else {
            return Ok(DecisionOutcome::NotFound);
        };
        if record.status.is_terminal() {
            return Ok(DecisionOutcome::AlreadyDecided(record.status));
        }
        *record = record.clone().with_decision(decision);
        Ok(DecisionOutcome::Applied(record.clone()))
    }

    async fn approved_total(&self) -> Result<f64, DonationRepositoryError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|record| record.status == DonationStatus::Approved)
            .map(|record| record.amount)
            .sum())
    }
}

/// Case collection held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryCaseRepository {
    records: RwLock<Vec<Case>>,
}

impl InMemoryCaseRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CaseRepository for InMemoryCaseRepository {
    async fn insert(
        &self,
        draft: CaseDraft,
        image_urls: Vec<String>,
    ) -> Result<Case, CaseRepositoryError> {
        let record = Case {
            id: Uuid::new_v4(),
            patient_id: draft.patient_id().map(ToOwned::to_owned),
            patient_name: draft.patient_name().to_owned(),
            medical_condition: draft.medical_condition().to_owned(),
            description: draft.description().to_owned(),
            requested_amount: draft.requested_amount(),
            images: image_urls,
            status: CaseStatus::Pending,
            date_added: Utc::now(),
        };
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<Case>, CaseRepositoryError> {
        let records = self.records.read().await;
        Ok(newest_first(&records, |record| record.date_added))
    }

    async fn count(&self) -> Result<u64, CaseRepositoryError> {
        let records = self.records.read().await;
        Ok(records.len() as u64)
    }
}

/// Donator collection held in process memory, keyed by email.
#[derive(Debug, Default)]
pub struct InMemoryDonorRepository {
    records: RwLock<Vec<Donator>>,
}

impl InMemoryDonorRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DonorRepository for InMemoryDonorRepository {
    async fn find_or_create(
        &self,
        profile: DonorProfile,
    ) -> Result<(Donator, bool), DonorRepositoryError> {
        let mut records = self.records.write().await;
        if let Some(existing) = records.iter().find(|record| record.email == profile.email) {
            return Ok((existing.clone(), false));
        }
        let record = Donator {
            id: Uuid::new_v4(),
            subject: profile.subject,
            name: profile.name,
            email: profile.email,
            profile_pic: profile.picture,
            registration_date: Utc::now(),
        };
        records.push(record.clone());
        Ok((record, true))
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Donator>, DonorRepositoryError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| record.email == *email).cloned())
    }

    async fn count(&self) -> Result<u64, DonorRepositoryError> {
        let records = self.records.read().await;
        Ok(records.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use std::sync::Arc;

    use rstest::rstest;

    use super::*;

    fn submission(name: &str, email: &str, amount: f64) -> NewDonation {
        NewDonation::try_new(name, email, amount).expect("valid submission")
    }

    fn profile(email: &str) -> DonorProfile {
        DonorProfile {
            subject: format!("sub-{email}"),
            name: "A".to_owned(),
            email: EmailAddress::new(email).expect("valid email"),
            picture: None,
        }
    }

    #[tokio::test]
    async fn inserted_donations_are_listed_newest_first() {
        let repo = InMemoryDonationRepository::new();
        let first = repo
            .insert(submission("A", "a@x.com", 100.0))
            .await
            .expect("insert");
        let second = repo
            .insert(submission("B", "b@x.com", 200.0))
            .await
            .expect("insert");

        let listed = repo.list_all().await.expect("list");
        assert_eq!(
            listed.iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![second.id, first.id]
        );
    }

    #[tokio::test]
    async fn list_by_email_filters_and_ignores_status() {
        let repo = InMemoryDonationRepository::new();
        let mine = repo
            .insert(submission("A", "a@x.com", 100.0))
            .await
            .expect("insert");
        repo.insert(submission("B", "b@x.com", 200.0))
            .await
            .expect("insert");
        repo.apply_decision(
            &mine.id,
            DonationDecision::Reject {
                reason: "test".to_owned(),
            },
        )
        .await
        .expect("decision");

        let email = EmailAddress::new("a@x.com").expect("valid email");
        let listed = repo.list_by_email(&email).await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed.first().map(|d| d.status), Some(DonationStatus::Rejected));
    }

    #[tokio::test]
    async fn a_second_decision_reports_already_decided() {
        let repo = InMemoryDonationRepository::new();
        let stored = repo
            .insert(submission("A", "a@x.com", 500.0))
            .await
            .expect("insert");

        let approve = DonationDecision::Approve {
            transaction_id: "TXN1".to_owned(),
        };
        let first = repo
            .apply_decision(&stored.id, approve.clone())
            .await
            .expect("first decision");
        assert!(matches!(first, DecisionOutcome::Applied(_)));

        let second = repo
            .apply_decision(&stored.id, approve)
            .await
            .expect("second decision");
        assert_eq!(
            second,
            DecisionOutcome::AlreadyDecided(DonationStatus::Approved)
        );

        let found = repo
            .find_by_id(&stored.id)
            .await
            .expect("find")
            .expect("present");
        assert_eq!(found.transaction_id.as_deref(), Some("TXN1"));
    }

    #[tokio::test]
    async fn approved_total_ignores_pending_and_rejected() {
        let repo = InMemoryDonationRepository::new();
        let a = repo
            .insert(submission("A", "a@x.com", 500.0))
            .await
            .expect("insert");
        let b = repo
            .insert(submission("B", "b@x.com", 300.0))
            .await
            .expect("insert");
        repo.insert(submission("C", "c@x.com", 999.0))
            .await
            .expect("insert");

        repo.apply_decision(
            &a.id,
            DonationDecision::Approve {
                transaction_id: "TXN1".to_owned(),
            },
        )
        .await
        .expect("approve");
        repo.apply_decision(
            &b.id,
            DonationDecision::Reject {
                reason: "late".to_owned(),
            },
        )
        .await
        .expect("reject");

        let total = repo.approved_total().await.expect("total");
        assert_eq!(total, 500.0);
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_ids_report_not_found() {
        let repo = InMemoryDonationRepository::new();
        let outcome = repo
            .apply_decision(
                &Uuid::new_v4(),
                DonationDecision::Approve {
                    transaction_id: "TXN1".to_owned(),
                },
            )
            .await
            .expect("decision");
        assert_eq!(outcome, DecisionOutcome::NotFound);
    }

    #[tokio::test]
    async fn find_or_create_is_idempotent_per_email() {
        let repo = InMemoryDonorRepository::new();
        let (first, created_first) = repo
            .find_or_create(profile("a@x.com"))
            .await
            .expect("first upsert");
        let (second, created_second) = repo
            .find_or_create(profile("a@x.com"))
            .await
            .expect("second upsert");

        assert!(created_first);
        assert!(!created_second);
        assert_eq!(first.id, second.id);
        assert_eq!(repo.count().await.expect("count"), 1);
    }

    #[tokio::test]
    async fn concurrent_registration_of_one_email_creates_one_donator() {
        let repo = Arc::new(InMemoryDonorRepository::new());
        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.find_or_create(profile("a@x.com")).await })
            })
            .collect();
        for task in tasks {
            task.await.expect("task joins").expect("upsert succeeds");
        }

        assert_eq!(repo.count().await.expect("count"), 1);
    }

    #[tokio::test]
    async fn inserted_cases_count_and_list_newest_first() {
        let repo = InMemoryCaseRepository::new();
        let draft = |name: &str| {
            CaseDraft::try_new(None, name, "fracture", "", 100.0).expect("valid draft")
        };
        let first = repo
            .insert(draft("Ravi"), vec!["u1".to_owned()])
            .await
            .expect("insert");
        let second = repo
            .insert(draft("Meena"), vec!["u2".to_owned()])
            .await
            .expect("insert");

        let listed = repo.list_all().await.expect("list");
        assert_eq!(
            listed.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![second.id, first.id]
        );
        assert_eq!(repo.count().await.expect("count"), 2);
    }
}
