//! Driving port for the chat proxy.

use async_trait::async_trait;

use crate::domain::{ChatTurn, Error};

/// Driving port normalising a conversation and forwarding it to the hosted
/// completion API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatProxy: Send + Sync {
    /// Produce one assistant reply for the conversation.
    async fn respond(&self, history: Vec<ChatTurn>) -> Result<String, Error>;
}
