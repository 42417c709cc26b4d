//! Outbound adapters implementing the domain ports.

pub mod blob_http;
pub mod gemini;
pub mod google_identity;
pub mod persistence;
pub mod qr_http;

pub use blob_http::HttpBlobStore;
pub use gemini::GeminiChatCompletion;
pub use google_identity::GoogleIdentityVerifier;
pub use qr_http::HttpQrRenderer;
