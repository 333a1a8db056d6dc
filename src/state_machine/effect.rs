//! Effects produced by state transitions

use crate::transcript::TranscriptEntry;

/// Effects to be applied after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Redraw the live region with this markup
    RenderLive { markup: String },

    /// Empty the live region
    ClearLive,

    /// Append a finalized assistant turn to the transcript
    CommitEntry { entry: TranscriptEntry },
}

impl Effect {
    #[must_use]
    pub fn render_live(markup: String) -> Self {
        Effect::RenderLive { markup }
    }

    #[must_use]
    pub fn commit_entry(entry: TranscriptEntry) -> Self {
        Effect::CommitEntry { entry }
    }
}
