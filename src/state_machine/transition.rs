//! Pure state transition function

use super::{Effect, Event, LiveState};
use crate::markup::{render_live, Labels};
use crate::transcript::TranscriptEntry;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: LiveState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    #[must_use]
    pub fn new(state: LiveState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// The entry this transition commits, if any
    #[must_use]
    pub fn committed(&self) -> Option<&TranscriptEntry> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::CommitEntry { entry } => Some(entry),
            _ => None,
        })
    }
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs and performs no
/// I/O. Every event is accepted in every state.
#[must_use]
pub fn transition(state: &LiveState, labels: &Labels, event: Event) -> TransitionResult {
    match (state, event) {
        (_, Event::Append { fragment }) => {
            let mut text = state.text().to_string();
            text.push_str(&fragment);
            streaming(text, labels)
        }

        (_, Event::Rewrite { text }) => streaming(text, labels),

        // Clearing an empty region again is harmless, so the effect is
        // emitted unconditionally.
        (_, Event::Clear) => TransitionResult::new(LiveState::Empty).with_effect(Effect::ClearLive),

        (LiveState::Empty, Event::Commit) => TransitionResult::new(LiveState::Empty),

        // The entry and the cleared region are one result, applied together.
        (LiveState::Streaming { text }, Event::Commit) => TransitionResult::new(LiveState::Empty)
            .with_effect(Effect::commit_entry(TranscriptEntry::assistant(text.clone())))
            .with_effect(Effect::ClearLive),
    }
}

fn streaming(text: String, labels: &Labels) -> TransitionResult {
    let markup = render_live(&text, labels);
    TransitionResult::new(LiveState::Streaming { text }).with_effect(Effect::render_live(markup))
}
