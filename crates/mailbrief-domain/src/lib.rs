//! Mailbrief Domain Layer
//!
//! Wire types shared by the extraction core, the provider layer, and the
//! HTTP service. This crate defines the summarize request/response contract
//! and the user-selectable summary options.
//!
//! ## Key Concepts
//!
//! - **SummarizeRequest**: email text plus length/focus options
//! - **SummarizeResponse**: summary text, optional extracted lists, or an error
//! - **Focus mode**: user-selected emphasis (general, key-points, action-items)
//!
//! Field and variant names serialize in the original wire format
//! (camelCase fields, kebab-case enum values) so existing clients keep working.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod options;
pub mod summarize;

// Re-exports for convenience
pub use options::{SummarizeOptions, SummaryFocus, SummaryLength};
pub use summarize::{SummarizeRequest, SummarizeResponse};
