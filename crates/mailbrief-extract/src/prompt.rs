//! System prompt construction for the summarization call

use mailbrief_domain::{SummarizeOptions, SummaryFocus, SummaryLength};

/// Base instruction shared by every summarization prompt
const BASE_INSTRUCTION: &str =
    "You are an AI email summarizer. Summarize the following email content";

/// Builds the system prompt sent alongside the raw email content
///
/// The prompt is a concatenation of fixed phrase fragments selected by the
/// requested length and focus; the email itself travels separately as the
/// user message.
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder {
    options: SummarizeOptions,
}

impl PromptBuilder {
    /// Create a prompt builder for the given options
    pub fn new(options: SummarizeOptions) -> Self {
        Self { options }
    }

    /// Build the complete system prompt
    pub fn build(&self) -> String {
        let mut prompt = String::from(BASE_INSTRUCTION);

        prompt.push_str(match self.options.length {
            SummaryLength::Short => " in 1-2 sentences",
            SummaryLength::Medium => " in 3-4 sentences",
            SummaryLength::Long => " with more detail",
        });

        prompt.push_str(match self.options.focus {
            SummaryFocus::ActionItems => {
                " with a focus on action items required. \
                 Include a list of action items at the end."
            }
            SummaryFocus::KeyPoints => {
                " with a focus on key points. Include a list of key points at the end."
            }
            SummaryFocus::General => " with a general focus.",
        });

        prompt
    }
}
