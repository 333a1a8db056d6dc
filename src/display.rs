//! Notebook display adapters
//!
//! `JsonDisplayTarget` speaks the notebook display-message shape as JSON
//! lines: one `display_data` when a region is shown, then an
//! `update_display_data` carrying the region's full markup on every change.
//! A kernel-side bridge forwards these lines to the frontend unchanged.

use crate::runtime::{InputControl, RenderTarget};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A display message as written to the output stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "msg_type", rename_all = "snake_case")]
pub enum DisplayMessage {
    DisplayData(DisplayContent),
    UpdateDisplayData(DisplayContent),
}

impl DisplayMessage {
    #[must_use]
    pub fn content(&self) -> &DisplayContent {
        match self {
            DisplayMessage::DisplayData(content) | DisplayMessage::UpdateDisplayData(content) => {
                content
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayContent {
    pub data: MimeBundle,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub transient: Transient,
}

impl DisplayContent {
    fn html(display_id: &str, html: String) -> Self {
        Self {
            data: MimeBundle { html },
            metadata: Map::new(),
            transient: Transient {
                display_id: display_id.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MimeBundle {
    #[serde(rename = "text/html")]
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transient {
    pub display_id: String,
}

// ============================================================================
// JSON display target
// ============================================================================

/// Render target backed by a display id on a JSON-lines stream
pub struct JsonDisplayTarget<W> {
    display_id: String,
    state: Mutex<TargetState<W>>,
}

struct TargetState<W> {
    writer: W,
    /// Everything currently shown in the region
    content: String,
}

impl<W: Write + Send> JsonDisplayTarget<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_display_id(writer, uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn with_display_id(writer: W, display_id: impl Into<String>) -> Self {
        Self {
            display_id: display_id.into(),
            state: Mutex::new(TargetState {
                writer,
                content: String::new(),
            }),
        }
    }

    #[must_use]
    pub fn display_id(&self) -> &str {
        &self.display_id
    }

    /// Markup the region currently shows
    #[must_use]
    pub fn content(&self) -> String {
        self.lock().content.clone()
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }

    fn lock(&self) -> MutexGuard<'_, TargetState<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, change: impl FnOnce(&mut String)) {
        let mut state = self.lock();
        change(&mut state.content);
        let message = DisplayMessage::UpdateDisplayData(DisplayContent::html(
            &self.display_id,
            state.content.clone(),
        ));
        self.emit(&mut state.writer, &message);
    }

    fn emit(&self, writer: &mut W, message: &DisplayMessage) {
        if let Err(e) = write_message(writer, message) {
            tracing::warn!(
                display_id = %self.display_id,
                error = %e,
                "Failed to write display message"
            );
        }
    }
}

fn write_message<W: Write>(writer: &mut W, message: &DisplayMessage) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, message)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

impl<W: Write + Send> RenderTarget for JsonDisplayTarget<W> {
    fn show(&self) {
        let mut state = self.lock();
        let message = DisplayMessage::DisplayData(DisplayContent::html(
            &self.display_id,
            state.content.clone(),
        ));
        self.emit(&mut state.writer, &message);
    }

    fn replace(&self, markup: &str) {
        self.update(|content| {
            content.clear();
            content.push_str(markup);
        });
    }

    fn append(&self, markup: &str) {
        self.update(|content| content.push_str(markup));
    }

    fn clear(&self) {
        self.update(String::clear);
    }
}

// ============================================================================
// In-memory input control
// ============================================================================

#[derive(Debug, Default)]
struct TextState {
    value: String,
    enabled: bool,
    placeholder: Option<String>,
}

/// Text box model for hosts that forward widget state to the cell
#[derive(Debug)]
pub struct TextInput {
    state: Mutex<TextState>,
}

impl TextInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(TextState {
                enabled: true,
                ..TextState::default()
            }),
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<String> {
        self.lock().placeholder.clone()
    }

    fn lock(&self) -> MutexGuard<'_, TextState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputControl for TextInput {
    fn show(&self, placeholder: &str) {
        self.lock().placeholder = Some(placeholder.to_string());
    }

    fn value(&self) -> String {
        self.lock().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.lock().value = value.to_string();
    }

    fn is_enabled(&self) -> bool {
        self.lock().enabled
    }

    fn set_enabled(&self, enabled: bool) {
        let mut state = self.lock();
        if state.enabled != enabled {
            tracing::trace!(enabled, "Input control toggled");
        }
        state.enabled = enabled;
    }
}
