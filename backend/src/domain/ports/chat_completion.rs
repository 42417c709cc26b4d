//! Port for hosted chat completion.

use async_trait::async_trait;

use crate::domain::ChatTurn;

/// Errors raised by chat completion adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatCompletionError {
    /// The hosted API rejected the conversation.
    #[error("chat completion rejected: {message}")]
    Rejected { message: String },
    /// The hosted API could not be reached or answered malformed data.
    #[error("chat completion transport failed: {message}")]
    Transport { message: String },
}

impl ChatCompletionError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

/// Port producing a bounded-length text reply for a conversation.
///
/// Callers must hand over a history whose first turn is a user turn; the
/// adapter enforces the output-length bound.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Complete the conversation with one assistant reply.
    async fn complete(&self, history: &[ChatTurn]) -> Result<String, ChatCompletionError>;
}

/// Fixture implementation echoing a canned reply.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureChatCompletion;

#[async_trait]
impl ChatCompletion for FixtureChatCompletion {
    async fn complete(&self, _history: &[ChatTurn]) -> Result<String, ChatCompletionError> {
        Ok("fixture reply".to_owned())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    #[tokio::test]
    async fn fixture_returns_a_canned_reply() {
        let completion = FixtureChatCompletion;
        let reply = completion.complete(&[]).await.expect("fixture reply");
        assert_eq!(reply, "fixture reply");
    }
}
