//! Property-based tests for the live response state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::transition::*;
use super::*;
use crate::markup::{escape_html, render_live, Labels};
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

/// Text biased towards markup-looking content
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,20}",
        "[<>&\"' a-z/=;#]{0,30}",
        Just("<script>alert('xss')</script>".to_string()),
        Just("<img src=x onerror=alert(1)>".to_string()),
        Just("&lt;&amp;&#60;".to_string()),
        any::<String>(),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => arb_text().prop_map(Event::append),
        1 => arb_text().prop_map(Event::rewrite),
        1 => Just(Event::Clear),
        1 => Just(Event::Commit),
    ]
}

fn arb_state() -> impl Strategy<Value = LiveState> {
    prop_oneof![
        Just(LiveState::Empty),
        arb_text().prop_map(|text| LiveState::Streaming { text }),
    ]
}

/// Every `&` in escaped output must start one of the entities we emit
fn only_known_entities(escaped: &str) -> bool {
    const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#x27;"];
    escaped
        .match_indices('&')
        .all(|(i, _)| ENTITIES.iter().any(|e| escaped.get(i..).is_some_and(|rest| rest.starts_with(e))))
}

// ============================================================================
// Escaping Properties
// ============================================================================

proptest! {
    #[test]
    fn escaped_text_has_no_raw_markup(text in arb_text()) {
        let escaped = escape_html(&text);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(only_known_entities(&escaped));
    }

    #[test]
    fn live_markup_wraps_escaped_text(text in arb_text()) {
        let labels = Labels::default();
        let html = render_live(&text, &labels);
        let empty = render_live("", &labels);
        // The template is fixed; only the escaped body varies.
        let (prefix, suffix) = empty.split_at(empty.len() - "</div>".len());
        let expected = format!("{prefix}{}{suffix}", escape_html(&text));
        prop_assert_eq!(html, expected);
    }

    #[test]
    fn script_tags_never_survive(before in "[a-z ]{0,10}", after in "[a-z ]{0,10}") {
        let text = format!("{before}<script>{after}");
        let html = render_live(&text, &Labels::default());
        prop_assert!(!html.contains("<script>"));
        prop_assert!(html.contains("&lt;script&gt;"));
    }
}

// ============================================================================
// State Machine Properties
// ============================================================================

proptest! {
    #[test]
    fn appends_concatenate(fragments in proptest::collection::vec(arb_text(), 1..8)) {
        let labels = Labels::default();
        let mut state = LiveState::Empty;
        for fragment in &fragments {
            state = transition(&state, &labels, Event::append(fragment.clone())).new_state;
        }
        prop_assert_eq!(state.text(), fragments.concat());
        prop_assert!(state.has_content());
    }

    #[test]
    fn clear_is_idempotent(state in arb_state()) {
        let labels = Labels::default();
        let once = transition(&state, &labels, Event::Clear).new_state;
        let twice = transition(&once, &labels, Event::Clear).new_state;
        prop_assert_eq!(&once, &LiveState::Empty);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn commit_always_ends_empty(state in arb_state()) {
        let result = transition(&state, &Labels::default(), Event::Commit);
        prop_assert_eq!(&result.new_state, &LiveState::Empty);
        match result.committed() {
            Some(entry) => prop_assert_eq!(entry.text(), state.text()),
            None => prop_assert!(!state.has_content()),
        }
    }

    #[test]
    fn render_effects_match_state(
        state in arb_state(),
        events in proptest::collection::vec(arb_event(), 0..20),
    ) {
        let labels = Labels::default();
        let mut state = state;
        for event in events {
            let result = transition(&state, &labels, event);
            for effect in &result.effects {
                if let Effect::RenderLive { markup } = effect {
                    prop_assert_eq!(markup, &render_live(result.new_state.text(), &labels));
                }
            }
            // Empty text with the flag cleared only ever happens in `Empty`.
            if !result.new_state.has_content() {
                prop_assert_eq!(result.new_state.text(), "");
            }
            state = result.new_state;
        }
    }
}
