//! HTTP request handlers for the summarization service.
//!
//! Implements the summarize endpoint and a health check using axum. Every
//! failure leaves the handler as a `{ "error": ... }` JSON body with the
//! status code matching its class; nothing panics across the HTTP boundary.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use mailbrief_domain::{SummarizeRequest, SummarizeResponse};
use mailbrief_extract::{build_response, PromptBuilder};
use mailbrief_llm::{ChatProvider, LlmError};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion backend, selected once at startup
    pub provider: Arc<dyn ChatProvider>,
    /// Model identifier, reported by the health endpoint
    pub model: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: &'static str,
    /// Configured model identifier
    pub model: String,
}

/// Application error type
///
/// Maps the error taxonomy onto HTTP statuses: validation → 400, upstream
/// provider failure → the provider's own status, transport or malformed
/// provider response → 502.
#[derive(Debug)]
pub enum AppError {
    /// Request failed validation before any provider call
    Validation(String),
    /// Provider call failed
    Provider(LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Provider(LlmError::Upstream { status, message }) => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
            AppError::Provider(LlmError::Communication(_)) => (
                StatusCode::BAD_GATEWAY,
                "Failed to connect to the summarization provider".to_string(),
            ),
            AppError::Provider(LlmError::InvalidResponse(message)) => {
                (StatusCode::BAD_GATEWAY, message)
            }
        };

        let body = Json(SummarizeResponse::from_error(message));
        (status, body).into_response()
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Provider(e)
    }
}

/// POST /api/summarize - Summarize pasted email text
///
/// Pipeline: validate → build prompt → provider call → extract lists.
async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    request.validate().map_err(AppError::Validation)?;

    let focus = request.options.focus;
    let system_prompt = PromptBuilder::new(request.options).build();

    debug!(
        content_len = request.email_content.len(),
        length = request.options.length.as_str(),
        focus = focus.as_str(),
        "summarize request"
    );

    let summary = match state
        .provider
        .chat(&system_prompt, &request.email_content)
        .await
    {
        Ok(summary) => summary,
        Err(e) => {
            warn!(error = %e, "provider call failed");
            return Err(e.into());
        }
    };

    Ok(Json(build_response(summary, focus)))
}

/// GET /health - Liveness probe
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.model,
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/summarize", post(summarize))
        .route("/health", get(health_check))
        .with_state(state)
}
