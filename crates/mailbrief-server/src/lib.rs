//! Mailbrief Server
//!
//! HTTP service wrapping a chat-completion provider for email summarization.
//! Accepts pasted email text plus length/focus options, forwards it to the
//! provider, and post-processes the reply into key points or action items.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use handlers::{create_router, AppState};
use mailbrief_llm::OpenAiProvider;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server
///
/// Resolves the provider credential (a missing credential fails here,
/// before anything is served), builds the provider once, and starts the
/// axum server.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Mailbrief server");
    info!("Bind address: {}", config.bind_addr());
    info!("Provider endpoint: {}", config.provider.endpoint);
    info!("Model: {}", config.provider.model);

    // Configuration errors surface before any network call
    let api_key = config.provider.resolve_api_key()?;

    let provider = OpenAiProvider::new(
        &config.provider.endpoint,
        api_key,
        &config.provider.model,
    )
    .with_temperature(config.provider.temperature)
    .with_max_tokens(config.provider.max_tokens);

    let state = AppState {
        provider: Arc::new(provider),
        model: config.provider.model.clone(),
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
