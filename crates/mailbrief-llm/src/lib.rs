//! Mailbrief LLM Provider Layer
//!
//! Chat-completion provider implementations behind a common trait.
//!
//! # Architecture
//!
//! The HTTP service depends only on the `ChatProvider` trait; which backend
//! answers is a startup decision, not a per-request one.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI-compatible chat-completions API over HTTPS
//!
//! # Examples
//!
//! ```
//! use mailbrief_llm::{ChatProvider, MockProvider};
//!
//! # async fn example() {
//! let provider = MockProvider::new("Hello from the model!");
//! let reply = provider.chat("system prompt", "user text").await.unwrap();
//! assert_eq!(reply, "Hello from the model!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod openai;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur when calling a chat-completion provider
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or transport failure before a response arrived
    #[error("Communication error: {0}")]
    Communication(String),

    /// Provider answered with a non-success HTTP status
    #[error("Provider error ({status}): {message}")]
    Upstream {
        /// HTTP status code the provider returned
        status: u16,
        /// Provider's error message, or a generic fallback
        message: String,
    },

    /// Provider answered success but the body was not the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A chat-completion backend
///
/// Takes a system prompt and a user message, returns the assistant's reply
/// text. Implementations must not panic on provider misbehavior; every
/// failure maps to an `LlmError`.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send one chat-completion request and return the reply content
    async fn chat(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

/// Mock chat provider for deterministic testing
///
/// Returns pre-configured responses keyed by the user message, without any
/// network calls. Cloning shares the response table and call counter.
///
/// # Examples
///
/// ```
/// use mailbrief_llm::{ChatProvider, MockProvider};
///
/// # async fn example() {
/// let mut provider = MockProvider::default();
/// provider.add_response("email one", "Summary one");
/// provider.add_response("email two", "Summary two");
///
/// assert_eq!(provider.chat("sys", "email one").await.unwrap(), "Summary one");
/// assert_eq!(provider.call_count(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    errors: Arc<Mutex<HashMap<String, LlmErrorKind>>>,
    call_count: Arc<Mutex<usize>>,
}

/// Cloneable stand-in for `LlmError` used by the mock's error table
#[derive(Debug, Clone)]
enum LlmErrorKind {
    Communication,
    Upstream { status: u16, message: String },
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all user messages
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            errors: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given user message
    pub fn add_response(&mut self, user: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(user.into(), response.into());
    }

    /// Configure a transport failure for a given user message
    pub fn add_communication_error(&mut self, user: impl Into<String>) {
        self.errors
            .lock()
            .unwrap()
            .insert(user.into(), LlmErrorKind::Communication);
    }

    /// Configure an upstream HTTP failure for a given user message
    pub fn add_upstream_error(
        &mut self,
        user: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) {
        self.errors.lock().unwrap().insert(
            user.into(),
            LlmErrorKind::Upstream {
                status,
                message: message.into(),
            },
        );
    }

    /// Get the number of times chat was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock summary")
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    async fn chat(&self, _system: &str, user: &str) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(kind) = self.errors.lock().unwrap().get(user) {
            return Err(match kind {
                LlmErrorKind::Communication => {
                    LlmError::Communication("Mock transport failure".to_string())
                }
                LlmErrorKind::Upstream { status, message } => LlmError::Upstream {
                    status: *status,
                    message: message.clone(),
                },
            });
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(user) {
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.chat("sys", "any message").await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.chat("s", "hello").await.unwrap(), "world");
        assert_eq!(provider.chat("s", "foo").await.unwrap(), "bar");
        assert_eq!(
            provider.chat("s", "unknown").await.unwrap(),
            "Default mock summary"
        );
    }

    #[tokio::test]
    async fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);

        provider.chat("s", "one").await.unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.chat("s", "two").await.unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_provider_upstream_error() {
        let mut provider = MockProvider::default();
        provider.add_upstream_error("bad email", 429, "Rate limit reached");

        let result = provider.chat("s", "bad email").await;
        match result {
            Err(LlmError::Upstream { status, message }) => {
                assert_eq!(status, 429);
                assert_eq!(message, "Rate limit reached");
            }
            other => panic!("Expected Upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_provider_communication_error() {
        let mut provider = MockProvider::default();
        provider.add_communication_error("offline");

        let result = provider.chat("s", "offline").await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.chat("s", "test").await.unwrap();

        // Both share the call counter through the Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
