//! Labeled-section list extraction from free-text summaries

use mailbrief_domain::{SummarizeResponse, SummaryFocus};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Header phrasings the model uses to label an action-items list
static ACTION_ITEMS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:action items:|actions:|to-do:|todo:)").unwrap()
});

/// Header phrasings the model uses to label a key-points list
static KEY_POINTS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:key points:|main points:|highlights:|important points:)").unwrap()
});

/// A section body ends at the first blank line or the next labeled header
static SECTION_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\n|\n\w+:").unwrap());

/// Line-leading bullet markers (`-`, `•`, `*`) or numbered markers (`1.`)
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[-•*]\s*|\n\d+\.\s*").unwrap());

/// Extract the labeled list matching the requested focus, if present
///
/// Returns `None` for a general focus, when no labeled section is found,
/// or when the section contains no items. Never panics, never errors —
/// absence of a match is a normal outcome.
pub fn extract_list(summary: &str, focus: SummaryFocus) -> Option<Vec<String>> {
    let header = match focus {
        SummaryFocus::General => return None,
        SummaryFocus::ActionItems => &*ACTION_ITEMS_HEADER,
        SummaryFocus::KeyPoints => &*KEY_POINTS_HEADER,
    };

    let Some(header_match) = header.find(summary) else {
        debug!(focus = focus.as_str(), "no labeled section in summary");
        return None;
    };

    let body = section_body(&summary[header_match.end()..]);

    let items: Vec<String> = LIST_MARKER
        .split(body)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() {
        debug!(focus = focus.as_str(), "labeled section had no items");
        None
    } else {
        Some(items)
    }
}

/// Assemble the response for a summary, populating at most one list field
///
/// The summary text passes through unchanged; which field the extracted
/// list lands in is decided by the focus.
pub fn build_response(summary: String, focus: SummaryFocus) -> SummarizeResponse {
    let items = extract_list(&summary, focus);
    let mut response = SummarizeResponse::from_summary(summary);

    match focus {
        SummaryFocus::General => {}
        SummaryFocus::ActionItems => response.action_items = items,
        SummaryFocus::KeyPoints => response.key_points = items,
    }

    response
}

/// Slice the section body out of the text following a header match
fn section_body(rest: &str) -> &str {
    match SECTION_END.find(rest) {
        Some(end) => &rest[..end.start()],
        None => rest,
    }
}
