//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated OpenAPI specification covering every
//! HTTP endpoint and the domain schemas they exchange.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CareFund backend API",
        description = "Donation management: UPI donation intents, donor \
                       registration, patient case publication, public \
                       statistics, and an assistant chat proxy."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::donations::donate,
        crate::inbound::http::donations::my_donations,
        crate::inbound::http::donors::register,
        crate::inbound::http::admin::login,
        crate::inbound::http::admin::approve_donation,
        crate::inbound::http::admin::reject_donation,
        crate::inbound::http::admin::list_donations,
        crate::inbound::http::cases::publish_case,
        crate::inbound::http::cases::list_admin_cases,
        crate::inbound::http::cases::list_public_cases,
        crate::inbound::http::stats::public_stats,
        crate::inbound::http::chat::chat,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::Error,
        crate::domain::ErrorCode,
        crate::domain::Donation,
        crate::domain::DonationStatus,
        crate::domain::Donator,
        crate::domain::Case,
        crate::domain::CaseStatus,
        crate::domain::ChatTurn,
        crate::domain::ChatRole,
        crate::domain::ports::PublicStats,
        crate::inbound::http::donations::DonateRequestBody,
        crate::inbound::http::donations::MyDonationsRequestBody,
        crate::inbound::http::donors::RegisterRequestBody,
        crate::inbound::http::donors::RegisterResponseBody,
        crate::inbound::http::admin::AdminLoginRequestBody,
        crate::inbound::http::admin::ApproveDonationRequestBody,
        crate::inbound::http::admin::RejectDonationRequestBody,
        crate::inbound::http::admin::DecisionResponseBody,
        crate::inbound::http::cases::CaseImageBody,
        crate::inbound::http::cases::PublishCaseRequestBody,
        crate::inbound::http::chat::ChatRequestBody,
        crate::inbound::http::chat::ChatResponseBody,
    )),
    tags(
        (name = "donations", description = "Donation intents and history"),
        (name = "donators", description = "Donor registration"),
        (name = "admin", description = "Admin review surface"),
        (name = "cases", description = "Patient case publication"),
        (name = "public", description = "Public read-only data"),
        (name = "chat", description = "Assistant chat proxy"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;
