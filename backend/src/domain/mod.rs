//! Domain entities, lifecycle services, and ports.
//!
//! Purpose: define the donation/case state-and-ledger model behind a
//! storage-agnostic boundary. Entities are immutable where observed
//! behaviour allows (donators and cases never change after creation;
//! donations change exactly once, via an admin decision).

pub mod case;
pub mod case_service;
pub mod chat;
pub mod chat_service;
pub mod donation;
pub mod donation_service;
pub mod donor;
pub mod donor_service;
pub mod error;
pub mod ports;
pub mod stats_service;
pub mod upi;

pub use self::case::{
    Case, CaseDraft, CaseStatus, CaseValidationError, ImageUpload, CASE_IMAGES_MAX,
    CASE_IMAGES_MIN,
};
pub use self::case_service::CaseService;
pub use self::chat::{normalise_history, ChatRole, ChatTurn};
pub use self::chat_service::ChatService;
pub use self::donation::{
    Donation, DonationDecision, DonationStatus, DonationValidationError, NewDonation,
};
pub use self::donation_service::DonationService;
pub use self::donor::{Donator, DonorProfile, EmailAddress, EmailValidationError};
pub use self::donor_service::DonorService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::stats_service::StatsService;
pub use self::upi::UpiAccount;

/// Convenient API result alias.
pub type ApiResult<T> = Result<T, Error>;
