//! HTTP adapter: actix-web handlers over the domain ports.

pub mod admin;
pub mod cases;
pub mod chat;
pub mod donations;
pub mod donors;
pub mod error;
pub mod health;
pub mod routes;
pub mod state;
pub mod stats;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
pub use routes::configure;
pub use state::{AdminCredentials, HttpState};
