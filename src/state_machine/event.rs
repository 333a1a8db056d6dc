//! Events that drive the live response

/// Events that trigger live state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A delta fragment arrived from the producer
    Append { fragment: String },
    /// The producer sent a full snapshot of the response so far
    Rewrite { text: String },
    /// Discard the uncommitted response
    Clear,
    /// Move the finished response into the transcript
    Commit,
}

impl Event {
    #[must_use]
    pub fn append(fragment: impl Into<String>) -> Self {
        Event::Append {
            fragment: fragment.into(),
        }
    }

    #[must_use]
    pub fn rewrite(text: impl Into<String>) -> Self {
        Event::Rewrite { text: text.into() }
    }

    /// Short name for logging
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Append { .. } => "append",
            Event::Rewrite { .. } => "rewrite",
            Event::Clear => "clear",
            Event::Commit => "commit",
        }
    }
}
