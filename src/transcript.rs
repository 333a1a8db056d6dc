//! Append-only transcript of committed turns

use crate::markup::{render_entry, Labels};
use serde::Serialize;

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A committed turn. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    role: Role,
    /// Raw, unescaped text
    text: String,
}

impl TranscriptEntry {
    /// A user turn
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    /// An assistant turn for [`Transcript::append_assistant`]
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Ordered log of committed turns; insertion order is display order
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a user turn
    pub fn append_user(&mut self, text: impl Into<String>) -> &TranscriptEntry {
        self.push(TranscriptEntry::user(text))
    }

    /// Record a finalized assistant turn. The role is always `Assistant`.
    pub fn append_assistant(&mut self, entry: TranscriptEntry) -> &TranscriptEntry {
        self.push(TranscriptEntry {
            role: Role::Assistant,
            ..entry
        })
    }

    fn push(&mut self, entry: TranscriptEntry) -> &TranscriptEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    #[must_use]
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Markup for the whole log, as a full redraw would produce it
    #[must_use]
    pub fn render_all(&self, labels: &Labels) -> String {
        self.entries
            .iter()
            .map(|entry| render_entry(entry, labels))
            .collect()
    }
}
