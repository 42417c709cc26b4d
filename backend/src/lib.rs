//! CareFund backend library modules.
//!
//! Hexagonal layout: `domain` holds the use-cases and ports, `inbound`
//! the HTTP adapter, `outbound` the persistence and remote-service
//! adapters, and `server` the wiring.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
