//! OpenAI-compatible chat-completions provider
//!
//! Sends one chat-completion request per call: a system prompt built from
//! the summary options plus the raw email content as the user message.
//! Temperature and token limit are fixed configuration constants, not
//! per-request knobs.
//!
//! # Examples
//!
//! ```no_run
//! use mailbrief_llm::OpenAiProvider;
//!
//! let provider = OpenAiProvider::new(
//!     "https://api.openai.com/v1/chat/completions",
//!     "sk-...",
//!     "gpt-4o-mini",
//! );
//! ```

use crate::{ChatProvider, LlmError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default chat-completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default timeout for provider requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Default completion token limit
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Fallback message when the provider's error body is unusable
const GENERIC_FAILURE: &str = "Failed to summarize email";

/// Chat-completions provider speaking the OpenAI REST dialect
pub struct OpenAiProvider {
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    client: reqwest::Client,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

/// One message in the chat transcript
#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Success body: we only need the first choice's content
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

/// Error body shape: `{"error": {"message": "..."}}`
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl OpenAiProvider {
    /// Create a new provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: chat-completions URL (see [`DEFAULT_ENDPOINT`])
    /// - `api_key`: bearer token for the Authorization header
    /// - `model`: model identifier (e.g. "gpt-4o-mini")
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            client,
        }
    }

    /// Override the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the completion token limit
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// The configured model identifier
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Pull the provider's message out of an error body
    ///
    /// Prefers the structured `error.message` field, falls back to the raw
    /// body text, and finally to a generic failure string.
    fn error_message(body: &str) -> String {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            if let Some(detail) = parsed.error {
                return detail.message;
            }
        }
        if body.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            body.to_string()
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    async fn chat(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                message: Self::error_message(&body),
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no choices".to_string()))
    }
}
