//! Mailbrief Extractor
//!
//! The post-processing core of the service: turns the model's free-text
//! summary into structured lists, best-effort.
//!
//! # Overview
//!
//! When the user asks for an action-items or key-points focus, the system
//! prompt asks the model to append a labeled list to its summary. The model's
//! reply is still unstructured natural language, so this crate pattern-matches
//! the labeled section back out of the text and splits it into trimmed items.
//!
//! # Architecture
//!
//! ```text
//! Options → PromptBuilder → LLM → summary text → extract_list → lists
//! ```
//!
//! Extraction is tolerant by design: the model may phrase the header
//! differently or skip the list entirely, and that is a normal outcome
//! (the list field is simply omitted), never an error.
//!
//! # Example Usage
//!
//! ```
//! use mailbrief_extract::{build_response, extract_list};
//! use mailbrief_domain::SummaryFocus;
//!
//! let summary = "Meeting went well.\n\nAction Items:\n- Fix bug\n- Update docs";
//! let items = extract_list(summary, SummaryFocus::ActionItems).unwrap();
//! assert_eq!(items, vec!["Fix bug", "Update docs"]);
//!
//! let response = build_response(summary.to_string(), SummaryFocus::ActionItems);
//! assert_eq!(response.action_items.unwrap().len(), 2);
//! ```

#![warn(missing_docs)]

mod prompt;
mod sections;

#[cfg(test)]
mod tests;

pub use prompt::PromptBuilder;
pub use sections::{build_response, extract_list};
