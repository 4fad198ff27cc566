//! Summary options - user-selectable length and focus

use serde::{Deserialize, Serialize};

/// Requested summary length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    /// 1-2 sentences
    Short,

    /// 3-4 sentences
    Medium,

    /// Detailed summary
    Long,
}

impl Default for SummaryLength {
    fn default() -> Self {
        SummaryLength::Medium
    }
}

impl SummaryLength {
    /// Get the length name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
        }
    }
}

/// Requested summary emphasis
///
/// Drives both prompt construction (asking the model to append a labeled
/// list) and post-processing (extracting that list back out of the reply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryFocus {
    /// No particular emphasis; no list extraction is attempted
    General,

    /// Emphasize required actions; extract an "Action Items:" list
    ActionItems,

    /// Emphasize key takeaways; extract a "Key Points:" list
    KeyPoints,
}

impl Default for SummaryFocus {
    fn default() -> Self {
        SummaryFocus::General
    }
}

impl SummaryFocus {
    /// Get the focus name as a string (wire form)
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryFocus::General => "general",
            SummaryFocus::ActionItems => "action-items",
            SummaryFocus::KeyPoints => "key-points",
        }
    }
}

/// Options attached to a summarize request
///
/// Both fields default when the client omits them, matching the wire
/// contract where `options` itself is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeOptions {
    /// Requested summary length (default: medium)
    #[serde(default)]
    pub length: SummaryLength,

    /// Requested summary focus (default: general)
    #[serde(default)]
    pub focus: SummaryFocus,
}
