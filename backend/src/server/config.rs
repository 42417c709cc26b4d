//! Server configuration loaded via OrthoConfig.
//!
//! Every value can come from CLI flags, a config file, or `CAREFUND_*`
//! environment variables, merged in that order of precedence.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ADMIN_USERNAME: &str = "carefund";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Settings controlling the HTTP server and its outbound collaborators.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CAREFUND")]
pub struct AppSettings {
    /// Interface to bind.
    pub bind_addr: Option<String>,
    /// Port to listen on.
    pub port: Option<u16>,
    /// UPI virtual payment address donations are credited to.
    pub upi_vpa: String,
    /// Payee name shown when a donor leaves the name field blank.
    pub upi_payee_name: Option<String>,
    /// Admin login name.
    pub admin_username: Option<String>,
    /// Admin login password.
    pub admin_password: String,
    /// OAuth client id that donor ID tokens must be issued for.
    pub google_client_id: String,
    /// API key for the hosted completion service.
    pub gemini_api_key: String,
    /// Completion model name.
    pub gemini_model: Option<String>,
    /// Base URL of the blob storage write API.
    pub blob_endpoint: String,
    /// Bearer token for blob uploads.
    pub blob_token: String,
    /// QR image rendering endpoint.
    pub qr_endpoint: Option<String>,
}

impl AppSettings {
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn upi_payee_name(&self) -> &str {
        self.upi_payee_name.as_deref().unwrap_or("CareFund")
    }

    pub fn admin_username(&self) -> &str {
        self.admin_username
            .as_deref()
            .unwrap_or(DEFAULT_ADMIN_USERNAME)
    }

    pub fn gemini_model(&self) -> &str {
        self.gemini_model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }

    pub fn qr_endpoint(&self) -> &str {
        self.qr_endpoint.as_deref().unwrap_or(DEFAULT_QR_ENDPOINT)
    }
}
