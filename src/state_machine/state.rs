//! Live response state

use serde::Serialize;

/// State of the assistant turn currently being streamed
///
/// The text and the "has content" flag live in one enum, so they change
/// together on every transition. `Streaming` with empty text is reachable:
/// it means an append or rewrite happened, even if it carried no characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveState {
    /// Nothing in flight
    #[default]
    Empty,

    /// A response is being received
    Streaming { text: String },
}

impl LiveState {
    /// Accumulated raw text, empty when nothing is in flight
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            LiveState::Empty => "",
            LiveState::Streaming { text } => text,
        }
    }

    #[must_use]
    pub fn has_content(&self) -> bool {
        matches!(self, LiveState::Streaming { .. })
    }
}
