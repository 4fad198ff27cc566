//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files: bind address and the provider block
//! (endpoint, credential, model, sampling constants). The provider strategy
//! is decided here, once at startup, not per request.

use mailbrief_llm::openai::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable consulted when the config file omits the credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// Chat-completion provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Chat-completions endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer credential; when omitted, resolved from `OPENAI_API_KEY`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier (e.g., "gpt-4o-mini")
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature (fixed per deployment)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Completion token limit (fixed per deployment)
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl ProviderConfig {
    /// Resolve the credential: config file first, environment second
    ///
    /// A missing or empty credential is a configuration error, reported at
    /// startup before any network call is attempted.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        self.resolve_api_key_from(|name| std::env::var(name).ok())
    }

    /// Credential resolution with an injectable environment lookup
    fn resolve_api_key_from(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<String, ConfigError> {
        if let Some(key) = &self.api_key {
            if !key.is_empty() {
                return Ok(key.clone());
            }
        }

        match env(API_KEY_ENV) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::MissingField(format!(
                "provider.api_key (or the {} environment variable)",
                API_KEY_ENV
            ))),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            provider: ProviderConfig {
                api_key: Some("test-key-do-not-use-in-production".to_string()),
                ..ProviderConfig::default()
            },
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
