//! Server bootstrap: configuration, wiring, and the HTTP listener.

pub mod config;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use url::Url;

use crate::domain::{
    CaseService, ChatService, DonationService, DonorService, StatsService, UpiAccount,
};
use crate::inbound::http::health::{self, HealthState};
use crate::inbound::http::{self, AdminCredentials, HttpState};
use crate::outbound::persistence::{
    InMemoryCaseRepository, InMemoryDonationRepository, InMemoryDonorRepository,
};
use crate::outbound::{
    GeminiChatCompletion, GoogleIdentityVerifier, HttpBlobStore, HttpQrRenderer,
};

pub use config::AppSettings;

fn parse_endpoint(value: &str, what: &str) -> std::io::Result<Url> {
    Url::parse(value).map_err(|err| std::io::Error::other(format!("invalid {what}: {err}")))
}

fn client_error(what: &str, err: reqwest::Error) -> std::io::Error {
    std::io::Error::other(format!("failed to build {what} client: {err}"))
}

/// Wire repositories, outbound adapters, and services into handler state.
///
/// # Errors
///
/// Fails when a configured endpoint does not parse or an HTTP client
/// cannot be constructed.
pub fn build_state(settings: &AppSettings) -> std::io::Result<HttpState> {
    let donations = Arc::new(InMemoryDonationRepository::new());
    let cases = Arc::new(InMemoryCaseRepository::new());
    let donators = Arc::new(InMemoryDonorRepository::new());

    let qr = Arc::new(
        HttpQrRenderer::new(parse_endpoint(settings.qr_endpoint(), "QR endpoint")?)
            .map_err(|err| client_error("QR renderer", err))?,
    );
    let blobs = Arc::new(
        HttpBlobStore::new(
            parse_endpoint(settings.blob_endpoint.as_str(), "blob endpoint")?,
            settings.blob_token.clone(),
        )
        .map_err(|err| client_error("blob store", err))?,
    );
    let verifier = Arc::new(
        GoogleIdentityVerifier::new(settings.google_client_id.clone())
            .map_err(|err| client_error("identity verifier", err))?,
    );
    let completion = Arc::new(
        GeminiChatCompletion::new(settings.gemini_model(), settings.gemini_api_key.clone())
            .map_err(|err| client_error("chat completion", err))?,
    );

    let upi = UpiAccount {
        vpa: settings.upi_vpa.clone(),
        fallback_payee_name: settings.upi_payee_name().to_owned(),
    };

    Ok(HttpState {
        donations: Arc::new(DonationService::new(Arc::clone(&donations), qr, upi)),
        cases: Arc::new(CaseService::new(Arc::clone(&cases), blobs)),
        donors: Arc::new(DonorService::new(Arc::clone(&donators), verifier)),
        stats: Arc::new(StatsService::new(donations, cases, donators)),
        chat: Arc::new(ChatService::new(completion)),
        admin: AdminCredentials {
            username: settings.admin_username().to_owned(),
            password: settings.admin_password.clone(),
        },
    })
}

/// Bind the listener and serve until shutdown.
///
/// # Errors
///
/// Fails when wiring fails or the address cannot be bound.
pub async fn run(settings: AppSettings) -> std::io::Result<()> {
    let state = build_state(&settings)?;
    let health_state = web::Data::new(HealthState::new());
    let server_health_state = health_state.clone();

    let bind = (settings.bind_addr().to_owned(), settings.port());
    tracing::info!(addr = %bind.0, port = bind.1, "starting server");

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(server_health_state.clone())
            .service(health::ready)
            .service(health::live)
            .configure(http::configure)
    })
    .bind(bind)?;

    health_state.mark_ready();
    server.run().await
}
