//! Reqwest-backed chat completion adapter for the Gemini API.
//!
//! Owns transport details only: request serialisation into the
//! `generateContent` wire shape, the output-token bound, and decoding of the
//! first candidate's text parts.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{ChatCompletion, ChatCompletionError};
use crate::domain::{ChatRole, ChatTurn};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Reply bound forwarded to the API; keeps answers chat-widget sized.
const MAX_OUTPUT_TOKENS: u32 = 512;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequestDto {
    contents: Vec<ContentDto>,
    generation_config: GenerationConfigDto,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentDto {
    role: String,
    parts: Vec<PartDto>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PartDto {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfigDto {
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponseDto {
    #[serde(default)]
    candidates: Vec<CandidateDto>,
}

#[derive(Debug, Deserialize)]
struct CandidateDto {
    content: ContentDto,
}

fn role_label(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Model => "model",
    }
}

fn to_wire(history: &[ChatTurn]) -> Vec<ContentDto> {
    history
        .iter()
        .map(|turn| ContentDto {
            role: role_label(turn.role).to_owned(),
            parts: vec![PartDto {
                text: turn.text.clone(),
            }],
        })
        .collect()
}

fn reply_text(response: GenerateContentResponseDto) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text: String = candidate
        .content
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Chat completion adapter for the hosted Gemini API.
pub struct GeminiChatCompletion {
    client: Client,
    api_base: Url,
    model: String,
    api_key: String,
}

impl GeminiChatCompletion {
    /// Build an adapter for the given model and API key.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or
    /// the default API base fails to parse.
    pub fn new(
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let api_base = Url::parse(DEFAULT_API_BASE)
            .unwrap_or_else(|_| unreachable!("default API base is a valid URL"));
        Self::with_api_base(api_base, model, api_key, DEFAULT_TIMEOUT)
    }

    /// Build an adapter against an explicit API base, used by tests pointed
    /// at a stub server.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_api_base(
        api_base: Url,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_base,
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    fn generate_url(&self) -> Result<Url, ChatCompletionError> {
        self.api_base
            .join(format!("models/{}:generateContent", self.model).as_str())
            .map_err(|err| ChatCompletionError::rejected(format!("invalid model name: {err}")))
    }
}

#[async_trait]
impl ChatCompletion for GeminiChatCompletion {
    async fn complete(&self, history: &[ChatTurn]) -> Result<String, ChatCompletionError> {
        let request = GenerateContentRequestDto {
            contents: to_wire(history),
            generation_config: GenerationConfigDto {
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(self.generate_url()?)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|err| ChatCompletionError::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatCompletionError::rejected(format!(
                "API answered {status}: {body}"
            )));
        }

        let decoded: GenerateContentResponseDto = response
            .json()
            .await
            .map_err(|err| ChatCompletionError::transport(err.to_string()))?;
        reply_text(decoded)
            .ok_or_else(|| ChatCompletionError::rejected("API returned no candidate text"))
    }
}
