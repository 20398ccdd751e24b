use crate::dom::DomAdapter;
use crate::test_utils::test_helpers::{
    deliver, deliver_for, last_request_id, test_widget, type_term,
};
use crate::transport::Flow;

const CITIES: &str = r#"{"cities": ["Boston", "Austin"]}"#;

#[test]
fn test_typing_issues_a_lookup_request() {
    let mut widget = test_widget();
    type_term(&mut widget, "bo");

    assert_eq!(widget.transport.sent.len(), 1);
    let request = &widget.transport.sent[0];
    assert_eq!(request.flow, Flow::Lookup);
    assert_eq!(request.body, "find=bo&type=lookup");
    assert_eq!(widget.session.last_search, "bo");
}

#[test]
fn test_term_is_url_encoded_in_request_body() {
    let mut widget = test_widget();
    type_term(&mut widget, "new york");
    assert_eq!(widget.transport.sent[0].body, "find=new%20york&type=lookup");
}

#[test]
fn test_input_is_trimmed_before_lookup() {
    let mut widget = test_widget();
    type_term(&mut widget, "  bo  ");
    assert_eq!(widget.transport.sent[0].body, "find=bo&type=lookup");
}

#[test]
fn test_invalid_input_sets_error_and_sends_nothing() {
    let mut widget = test_widget();
    type_term(&mut widget, "abc$%");

    assert!(widget.transport.sent.is_empty());
    assert_eq!(widget.dom().input_class(), "suggest-error");
    // The user's raw text is left untouched
    assert_eq!(widget.dom().input_value(), "abc$%");
}

#[test]
fn test_empty_input_resets_search_and_clears_results() {
    let mut widget = test_widget();
    type_term(&mut widget, "bo");
    deliver(&mut widget, Flow::Lookup, CITIES);
    assert!(widget.dom().results_visible());

    type_term(&mut widget, "   ");
    assert!(!widget.dom().results_visible());
    assert!(widget.session.last_search.is_empty());
    assert_eq!(widget.transport.sent.len(), 1);
}

#[test]
fn test_redundant_search_is_suppressed() {
    let mut widget = test_widget();
    type_term(&mut widget, "bo");
    type_term(&mut widget, "bo");

    // Submitting the same sanitized term twice issues exactly one request
    assert_eq!(widget.transport.sent.len(), 1);
}

#[test]
fn test_rapid_keystrokes_coalesce_into_one_lookup() {
    let mut widget = test_widget();
    widget.dom_mut().set_input_value("b");
    widget.handle_key(crate::controller::Key::Other);
    widget.dom_mut().set_input_value("bo");
    widget.handle_key(crate::controller::Key::Other);
    widget.tick();

    assert_eq!(widget.transport.sent.len(), 1);
    assert_eq!(widget.transport.sent[0].body, "find=bo&type=lookup");
}

#[test]
fn test_lookup_reply_renders_formatted_lines() {
    let mut widget = test_widget();
    type_term(&mut widget, "bo");
    deliver(&mut widget, Flow::Lookup, CITIES);

    let lines = widget.dom().rendered_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].html, "<b>Bo</b>ston");
    assert_eq!(lines[0].id, "result_0");
    assert_eq!(lines[1].html, "Austin");
    assert_eq!(lines[1].id, "result_1");
    assert!(widget.dom().results_visible());
    assert_eq!(widget.session.nav.match_count, 2);
}

#[test]
fn test_categories_render_in_server_order_with_sequential_ids() {
    let mut widget = test_widget();
    type_term(&mut widget, "spring");
    deliver(
        &mut widget,
        Flow::Lookup,
        r#"{"towns": ["Springfield"], "rivers": ["Spring Creek", "Springwater"]}"#,
    );

    let lines = widget.dom().rendered_lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].html, "<b>Spring</b>field");
    assert_eq!(lines[1].html, "<b>Spring</b> Creek");
    assert_eq!(lines[2].html, "<b>Spring</b>water");
    assert_eq!(lines[2].id, "result_2");
    assert_eq!(widget.session.nav.match_count, 3);
}

#[test]
fn test_empty_groups_render_no_matches_placeholder() {
    let mut widget = test_widget();
    type_term(&mut widget, "zzz");
    deliver(&mut widget, Flow::Lookup, r#"{}"#);

    assert_eq!(widget.session.nav.match_count, 0);
    assert!(widget.dom().rendered_lines().is_empty());
    assert_eq!(
        widget.dom().no_matches_message(),
        Some("Sorry, no matches found.")
    );
    assert_eq!(widget.dom().no_matches_class(), Some("suggest-empty"));
    assert!(widget.dom().results_visible());
}

#[test]
fn test_all_empty_groups_count_as_no_matches() {
    let mut widget = test_widget();
    type_term(&mut widget, "zzz");
    deliver(&mut widget, Flow::Lookup, r#"{"cities": [], "towns": []}"#);

    assert_eq!(widget.session.nav.match_count, 0);
    assert!(widget.dom().no_matches_message().is_some());
}

#[test]
fn test_stale_lookup_reply_is_discarded() {
    let mut widget = test_widget();
    type_term(&mut widget, "bo");
    let first = last_request_id(&widget, Flow::Lookup).unwrap();
    type_term(&mut widget, "bos");
    let second = last_request_id(&widget, Flow::Lookup).unwrap();
    assert_ne!(first, second);

    // The older reply arrives after the newer request was issued
    deliver_for(&mut widget, Flow::Lookup, first, CITIES);
    assert!(widget.dom().rendered_lines().is_empty());
    assert!(!widget.dom().results_visible());

    // Only the latest request's reply takes effect
    deliver_for(
        &mut widget,
        Flow::Lookup,
        second,
        r#"{"cities": ["Boston"]}"#,
    );
    let lines = widget.dom().rendered_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].html, "<b>Bos</b>ton");
}

#[test]
fn test_empty_reply_body_changes_nothing() {
    let mut widget = test_widget();
    type_term(&mut widget, "bo");
    deliver(&mut widget, Flow::Lookup, CITIES);

    type_term(&mut widget, "bos");
    deliver(&mut widget, Flow::Lookup, "");

    // Prior rendering survives an empty body
    assert_eq!(widget.dom().rendered_lines().len(), 2);
}

#[test]
fn test_malformed_payload_is_swallowed_and_ui_unchanged() {
    let mut widget = test_widget();
    type_term(&mut widget, "bo");
    deliver(&mut widget, Flow::Lookup, CITIES);

    type_term(&mut widget, "bos");
    deliver(&mut widget, Flow::Lookup, "{not json");
    assert_eq!(widget.dom().rendered_lines().len(), 2);

    deliver(&mut widget, Flow::Lookup, r#"["not", "an", "object"]"#);
    assert_eq!(widget.dom().rendered_lines().len(), 2);

    deliver(&mut widget, Flow::Lookup, r#"{"cities": "Boston"}"#);
    assert_eq!(widget.dom().rendered_lines().len(), 2);

    deliver(&mut widget, Flow::Lookup, r#"{"cities": [1, 2]}"#);
    assert_eq!(widget.dom().rendered_lines().len(), 2);
}

#[test]
fn test_new_results_replace_old_ones_wholesale() {
    let mut widget = test_widget();
    type_term(&mut widget, "bo");
    deliver(&mut widget, Flow::Lookup, CITIES);
    widget.handle_key(crate::controller::Key::Down);

    type_term(&mut widget, "au");
    deliver(&mut widget, Flow::Lookup, r#"{"cities": ["Austin"]}"#);

    let lines = widget.dom().rendered_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].html, "<b>Au</b>stin");
    // Navigation state was reset along with the lines
    assert_eq!(widget.session.nav.selected, None);
    assert!(!widget.session.nav.result_selected);
}

#[test]
fn test_custom_post_key_is_used() {
    let mut options = crate::test_utils::test_helpers::styled_options();
    options.behavior.suggestions_post_key = "q".to_string();
    let mut widget = crate::test_utils::test_helpers::test_widget_with(options);

    type_term(&mut widget, "bo");
    assert_eq!(widget.transport.sent[0].body, "q=bo&type=lookup");
}
