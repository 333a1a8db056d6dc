//! Trait abstractions for the host surface
//!
//! These traits keep the cell independent of any particular notebook
//! frontend and let tests drive it with recording mocks.

use std::sync::Arc;

/// A region of the host display that accepts markup
///
/// Implementations only draw; they hold no chat logic and cannot fail from
/// the cell's point of view.
pub trait RenderTarget: Send + Sync {
    /// Put the (empty) region on screen
    fn show(&self) {}

    /// Redraw the region with exactly this markup
    fn replace(&self, markup: &str);

    /// Add markup after the region's current content
    fn append(&self, markup: &str);

    /// Remove all content from the region
    fn clear(&self);
}

/// A single-line text entry control
pub trait InputControl: Send + Sync {
    /// Put the control on screen
    fn show(&self, _placeholder: &str) {}

    fn value(&self) -> String;

    fn set_value(&self, value: &str);

    fn is_enabled(&self) -> bool;

    fn set_enabled(&self, enabled: bool);
}

// ============================================================================
// Arc implementations for shared handles
// ============================================================================

impl<T: RenderTarget + ?Sized> RenderTarget for Arc<T> {
    fn show(&self) {
        (**self).show();
    }

    fn replace(&self, markup: &str) {
        (**self).replace(markup);
    }

    fn append(&self, markup: &str) {
        (**self).append(markup);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

impl<T: InputControl + ?Sized> InputControl for Arc<T> {
    fn show(&self, placeholder: &str) {
        (**self).show(placeholder);
    }

    fn value(&self) -> String {
        (**self).value()
    }

    fn set_value(&self, value: &str) {
        (**self).set_value(value);
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }

    fn set_enabled(&self, enabled: bool) {
        (**self).set_enabled(enabled);
    }
}
