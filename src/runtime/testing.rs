//! Mock implementations for testing
//!
//! These mocks record every call so tests can assert on exactly what the
//! cell drew and how it toggled the input.

use super::traits::{InputControl, RenderTarget};
use crate::display::TextInput;
use std::sync::Mutex;

// ============================================================================
// Recording Render Target
// ============================================================================

/// One call made on a render target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    Show,
    Replace(String),
    Append(String),
    Clear,
}

/// Render target that records every call
#[derive(Default)]
pub struct RecordingTarget {
    ops: Mutex<Vec<RenderOp>>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> Vec<RenderOp> {
        self.ops.lock().unwrap().clone()
    }

    /// Markup from the most recent `replace`
    pub fn last_markup(&self) -> Option<String> {
        self.ops.lock().unwrap().iter().rev().find_map(|op| match op {
            RenderOp::Replace(markup) => Some(markup.clone()),
            _ => None,
        })
    }

    pub fn replace_count(&self) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| matches!(op, RenderOp::Replace(_)))
            .count()
    }

    /// Every `append` payload, in order
    pub fn appended_markup(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                RenderOp::Append(markup) => Some(markup.clone()),
                _ => None,
            })
            .collect()
    }
}

impl RenderTarget for RecordingTarget {
    fn show(&self) {
        self.ops.lock().unwrap().push(RenderOp::Show);
    }

    fn replace(&self, markup: &str) {
        self.ops
            .lock()
            .unwrap()
            .push(RenderOp::Replace(markup.to_string()));
    }

    fn append(&self, markup: &str) {
        self.ops
            .lock()
            .unwrap()
            .push(RenderOp::Append(markup.to_string()));
    }

    fn clear(&self) {
        self.ops.lock().unwrap().push(RenderOp::Clear);
    }
}

// ============================================================================
// Mock Input Control
// ============================================================================

/// Input control that remembers every enabled-flag change
#[derive(Default)]
pub struct MockInput {
    inner: TextInput,
    enabled_history: Mutex<Vec<bool>>,
}

impl MockInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(&self) -> Option<String> {
        self.inner.placeholder()
    }

    pub fn enabled_history(&self) -> Vec<bool> {
        self.enabled_history.lock().unwrap().clone()
    }
}

impl InputControl for MockInput {
    fn show(&self, placeholder: &str) {
        self.inner.show(placeholder);
    }

    fn value(&self) -> String {
        self.inner.value()
    }

    fn set_value(&self, value: &str) {
        self.inner.set_value(value);
    }

    fn is_enabled(&self) -> bool {
        self.inner.is_enabled()
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled_history.lock().unwrap().push(enabled);
        self.inner.set_enabled(enabled);
    }
}
