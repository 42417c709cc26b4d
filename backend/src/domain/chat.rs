//! Chat conversation model.
//!
//! The hosted completion API requires the first turn of a conversation to be
//! a user turn. Client-side widgets often seed the history with an assistant
//! greeting, so normalisation drops leading model turns instead of rejecting
//! the whole request.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// The requester.
    User,
    /// The assistant.
    Model,
}

/// One turn of a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    /// Turn author.
    pub role: ChatRole,
    /// Turn text.
    pub text: String,
}

/// Drop leading model turns so the history starts with the requester.
///
/// # Examples
/// ```
/// use carefund_backend::domain::{normalise_history, ChatRole, ChatTurn};
///
/// let greeting = ChatTurn { role: ChatRole::Model, text: "Hi!".to_owned() };
/// let question = ChatTurn { role: ChatRole::User, text: "How do I donate?".to_owned() };
/// let history = normalise_history(vec![greeting, question.clone()]);
/// assert_eq!(history, vec![question]);
/// ```
pub fn normalise_history(history: Vec<ChatTurn>) -> Vec<ChatTurn> {
    let first_user = history
        .iter()
        .position(|turn| turn.role == ChatRole::User)
        .unwrap_or(history.len());
    history.into_iter().skip(first_user).collect()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    fn turn(role: ChatRole, text: &str) -> ChatTurn {
        ChatTurn {
            role,
            text: text.to_owned(),
        }
    }

    #[test]
    fn history_starting_with_a_user_turn_is_unchanged() {
        let history = vec![turn(ChatRole::User, "hi"), turn(ChatRole::Model, "hello")];
        assert_eq!(normalise_history(history.clone()), history);
    }

    #[test]
    fn leading_model_turns_are_dropped() {
        let history = vec![
            turn(ChatRole::Model, "welcome"),
            turn(ChatRole::Model, "ask me anything"),
            turn(ChatRole::User, "ok"),
            turn(ChatRole::Model, "great"),
        ];
        let normalised = normalise_history(history);
        assert_eq!(normalised.len(), 2);
        assert_eq!(normalised.first().map(|t| t.role), Some(ChatRole::User));
    }

    #[test]
    fn model_only_history_normalises_to_empty() {
        let history = vec![turn(ChatRole::Model, "welcome")];
        assert!(normalise_history(history).is_empty());
    }

    #[test]
    fn roles_serialise_snake_case() {
        let value = serde_json::to_value(ChatRole::Model).expect("role serialises");
        assert_eq!(value, serde_json::json!("model"));
    }
}
