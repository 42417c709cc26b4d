//! Chat proxy service.
//!
//! Implements the [`ChatProxy`] driving port: the conversation is normalised
//! so it starts with a user turn, then forwarded to the hosted completion
//! collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::chat::normalise_history;
use crate::domain::ports::{ChatCompletion, ChatCompletionError, ChatProxy};
use crate::domain::{ChatTurn, Error};

fn map_completion_error(error: ChatCompletionError) -> Error {
    match error {
        ChatCompletionError::Rejected { message } => {
            Error::internal(format!("chat completion rejected: {message}"))
        }
        ChatCompletionError::Transport { message } => {
            Error::internal(format!("chat completion failed: {message}"))
        }
    }
}

/// Chat proxy service wrapping the completion collaborator.
#[derive(Clone)]
pub struct ChatService<C> {
    completion: Arc<C>,
}

impl<C> ChatService<C> {
    /// Create the service from the completion collaborator.
    pub fn new(completion: Arc<C>) -> Self {
        Self { completion }
    }
}

#[async_trait]
impl<C> ChatProxy for ChatService<C>
where
    C: ChatCompletion,
{
    async fn respond(&self, history: Vec<ChatTurn>) -> Result<String, Error> {
        let history = normalise_history(history);
        if history.is_empty() {
            return Err(Error::invalid_request(
                "chat history must contain a user turn",
            )
            .with_details(json!({ "field": "history", "code": "no_user_turn" })));
        }

        self.completion
            .complete(&history)
            .await
            .map_err(map_completion_error)
    }
}

#[cfg(test)]
#[path = "chat_service_tests.rs"]
mod tests;
