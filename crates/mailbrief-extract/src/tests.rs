//! Crate-level scenario tests for the extraction pipeline

use crate::{build_response, extract_list, PromptBuilder};
use mailbrief_domain::{SummarizeOptions, SummaryFocus, SummaryLength};

#[test]
fn scenario_action_items_from_meeting_summary() {
    let summary = "Meeting went well.\n\nAction Items:\n- Fix bug\n- Update docs";

    let response = build_response(summary.to_string(), SummaryFocus::ActionItems);

    assert_eq!(response.summary, summary);
    assert_eq!(
        response.action_items,
        Some(vec!["Fix bug".to_string(), "Update docs".to_string()])
    );
    assert_eq!(response.key_points, None);
    assert_eq!(response.error, None);
}

#[test]
fn scenario_numbered_key_points() {
    let summary = "Key Points:\n1. Revenue up\n2. Costs down";

    let response = build_response(summary.to_string(), SummaryFocus::KeyPoints);

    assert_eq!(
        response.key_points,
        Some(vec!["Revenue up".to_string(), "Costs down".to_string()])
    );
    assert_eq!(response.action_items, None);
}

#[test]
fn scenario_plain_paragraph_yields_no_list() {
    let response = build_response("Just a plain paragraph.".to_string(), SummaryFocus::ActionItems);

    // Field omitted entirely, never an empty list
    assert_eq!(response.action_items, None);
    assert_eq!(response.summary, "Just a plain paragraph.");
}

#[test]
fn scenario_focus_selects_which_list_is_parsed() {
    // A reply carrying both section types only yields the requested one
    let summary = "Recap.\n\nKey Points:\n- Budget approved\n\nAction Items:\n- Send invoices";

    let as_key_points = build_response(summary.to_string(), SummaryFocus::KeyPoints);
    assert_eq!(as_key_points.key_points, Some(vec!["Budget approved".to_string()]));
    assert_eq!(as_key_points.action_items, None);

    let as_action_items = build_response(summary.to_string(), SummaryFocus::ActionItems);
    assert_eq!(as_action_items.action_items, Some(vec!["Send invoices".to_string()]));
    assert_eq!(as_action_items.key_points, None);
}

#[test]
fn scenario_prompt_and_extraction_agree_on_labels() {
    // The prompt asks for the list the extractor knows how to find
    let options = SummarizeOptions {
        length: SummaryLength::Short,
        focus: SummaryFocus::ActionItems,
    };
    let prompt = PromptBuilder::new(options).build();
    assert!(prompt.contains("action items"));

    // A well-behaved model reply to that prompt round-trips
    let reply = "Short recap.\n\nAction Items:\n1. Reply to Dana\n2. Book the room";
    let items = extract_list(reply, options.focus).unwrap();
    assert_eq!(items, vec!["Reply to Dana", "Book the room"]);
}
