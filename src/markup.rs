//! HTML rendering for chat turns
//!
//! Every piece of caller-supplied text (message bodies and role labels) goes
//! through [`escape_html`] before it is placed inside a template. The
//! templates themselves are the only source of raw markup.

use crate::transcript::{Role, TranscriptEntry};

const TURN_STYLE: &str = "white-space: pre-wrap; margin: 0.25em 0;";
const LIVE_STYLE: &str = "white-space: pre-wrap; margin: 0.25em 0; opacity: 0.85;";

/// Display labels for each role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub user: String,
    pub assistant: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            user: "user".to_string(),
            assistant: "assistant".to_string(),
        }
    }
}

impl Labels {
    #[must_use]
    pub fn for_role(&self, role: Role) -> &str {
        match role {
            Role::User => &self.user,
            Role::Assistant => &self.assistant,
        }
    }
}

/// Escape text for embedding in HTML element content or quoted attributes.
///
/// Each input character is mapped independently, so `&` in the input becomes
/// `&amp;` exactly once and entities produced for `<` / `>` are never
/// re-escaped.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the in-progress assistant turn
#[must_use]
pub fn render_live(text: &str, labels: &Labels) -> String {
    format!(
        "<div class=\"chat-turn chat-live\" style=\"{LIVE_STYLE}\"><b>{}:</b> {}</div>",
        escape_html(&labels.assistant),
        escape_html(text)
    )
}

/// Render a committed transcript entry
#[must_use]
pub fn render_entry(entry: &TranscriptEntry, labels: &Labels) -> String {
    format!(
        "<div class=\"chat-turn chat-{}\" style=\"{TURN_STYLE}\"><b>{}:</b> {}</div>",
        entry.role().as_str(),
        escape_html(labels.for_role(entry.role())),
        escape_html(entry.text())
    )
}
