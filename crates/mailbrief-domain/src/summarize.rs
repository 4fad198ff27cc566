//! Summarize request/response wire types

use crate::options::SummarizeOptions;
use serde::{Deserialize, Serialize};

/// Request to summarize a block of email text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    /// Raw email text to summarize
    ///
    /// Defaults to empty when the field is absent so that a missing field
    /// reports as a validation error rather than a deserialization failure.
    #[serde(default)]
    pub email_content: String,

    /// Length/focus options (all defaulted when omitted)
    #[serde(default)]
    pub options: SummarizeOptions,
}

impl SummarizeRequest {
    /// Validate the request before any provider call
    ///
    /// The only invariant is that the email content is non-empty after
    /// trimming. Violation is a validation error, never a panic.
    pub fn validate(&self) -> Result<(), String> {
        if self.email_content.trim().is_empty() {
            return Err("Email content is required".to_string());
        }
        Ok(())
    }
}

/// Response from a summarize call
///
/// Exactly one of `summary` (non-empty) or `error` is populated. The list
/// fields are present only when the matching focus was requested and the
/// extraction heuristic found a labeled section; absent fields are omitted
/// from the JSON entirely, never serialized as empty lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    /// The model's summary text (empty on failure)
    pub summary: String,

    /// Extracted key points, when focus = key-points and extraction matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,

    /// Extracted action items, when focus = action-items and extraction matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_items: Option<Vec<String>>,

    /// Error message, present only on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SummarizeResponse {
    /// Build a successful response carrying only the summary text
    pub fn from_summary(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            key_points: None,
            action_items: None,
            error: None,
        }
    }

    /// Build a failure response; summary is empty and lists are absent
    pub fn from_error(error: impl Into<String>) -> Self {
        Self {
            summary: String::new(),
            key_points: None,
            action_items: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{SummaryFocus, SummaryLength};

    #[test]
    fn test_request_wire_format() {
        let json = r#"{
            "emailContent": "Hi team, the release slipped to Friday.",
            "options": {"length": "short", "focus": "key-points"}
        }"#;

        let request: SummarizeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.email_content, "Hi team, the release slipped to Friday.");
        assert_eq!(request.options.length, SummaryLength::Short);
        assert_eq!(request.options.focus, SummaryFocus::KeyPoints);
    }

    #[test]
    fn test_request_options_optional() {
        let request: SummarizeRequest =
            serde_json::from_str(r#"{"emailContent": "Hello"}"#).unwrap();
        assert_eq!(request.options, SummarizeOptions::default());
    }

    #[test]
    fn test_missing_content_field_deserializes_empty() {
        let request: SummarizeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.email_content.is_empty());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_content() {
        let request = SummarizeRequest {
            email_content: "   \n\t ".to_string(),
            options: SummarizeOptions::default(),
        };
        assert_eq!(request.validate(), Err("Email content is required".to_string()));
    }

    #[test]
    fn test_validate_accepts_content() {
        let request = SummarizeRequest {
            email_content: "Please review the attached doc.".to_string(),
            options: SummarizeOptions::default(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_response_omits_absent_fields() {
        let response = SummarizeResponse::from_summary("All good.");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"summary":"All good."}"#);
    }

    #[test]
    fn test_response_serializes_action_items() {
        let mut response = SummarizeResponse::from_summary("Summary.");
        response.action_items = Some(vec!["Fix bug".to_string()]);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""actionItems":["Fix bug"]"#));
        assert!(!json.contains("keyPoints"));
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_error_response_has_empty_summary() {
        let response = SummarizeResponse::from_error("Upstream unavailable");
        assert!(response.summary.is_empty());
        assert_eq!(response.error.as_deref(), Some("Upstream unavailable"));
        assert!(response.key_points.is_none());
        assert!(response.action_items.is_none());
    }
}
