//! Submission handling
//!
//! Two phases: idle and submitting. The input control is disabled for the
//! submitting phase and a flag on the cell records that a callback is
//! running. The callback runs synchronously inside that phase; any
//! streaming it schedules happens afterwards.

use super::component::ChatCell;
use super::traits::{InputControl, RenderTarget};
use crate::error::ChatError;
use std::sync::atomic::{AtomicBool, Ordering};

/// What a submit event led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The value was empty under the configured blank-submission policy
    Ignored,
    /// The input was disabled, either by a submission in flight or by the
    /// host
    Busy,
    /// The message was recorded; `delivered` is false when no callback is
    /// connected
    Submitted { message: String, delivered: bool },
}

/// Keeps the input disabled and the in-flight flag set while alive, and
/// undoes both on drop.
///
/// Drop also runs while unwinding, so a panicking callback cannot leave the
/// user locked out.
#[must_use = "the input is re-enabled as soon as the guard is dropped"]
pub struct InputGuard<'a, C: InputControl + ?Sized> {
    input: &'a C,
    in_flight: &'a AtomicBool,
}

impl<'a, C: InputControl + ?Sized> InputGuard<'a, C> {
    pub fn acquire(input: &'a C, in_flight: &'a AtomicBool) -> Self {
        in_flight.store(true, Ordering::SeqCst);
        input.set_enabled(false);
        Self { input, in_flight }
    }
}

impl<C: InputControl + ?Sized> Drop for InputGuard<'_, C> {
    fn drop(&mut self) {
        self.input.set_enabled(true);
        self.in_flight.store(false, Ordering::SeqCst);
    }
}

impl<T, C> ChatCell<T, C>
where
    T: RenderTarget,
    C: InputControl,
{
    /// Handle a submit event from the input control.
    ///
    /// Reads the control's value, records it as a user turn and hands it to
    /// the connected callback. The input is enabled again before this
    /// returns, whether the callback succeeded, failed or panicked. A
    /// callback error is returned unchanged inside [`ChatError::Callback`].
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Callback`] when the connected callback fails. The
    /// user turn stays recorded and the input is enabled again.
    pub fn handle_submit(&self) -> Result<SubmitOutcome, ChatError> {
        let input = self.input();
        if !input.is_enabled() {
            tracing::debug!(
                submitting = self.is_submitting(),
                "Submit ignored, input disabled"
            );
            return Ok(SubmitOutcome::Busy);
        }

        let message = input.value();
        if self.config().blank_submissions.is_empty(&message) {
            tracing::debug!(len = message.len(), "Submit ignored, empty message");
            return Ok(SubmitOutcome::Ignored);
        }

        let _guard = InputGuard::acquire(input, self.submitting_flag());
        input.set_value("");
        self.append_user(&message);

        // Read once: a callback connected from here on applies to the next
        // submission.
        let Some(callback) = self.current_callback() else {
            tracing::info!(len = message.len(), "Message recorded, no callback connected");
            return Ok(SubmitOutcome::Submitted {
                message,
                delivered: false,
            });
        };

        tracing::info!(len = message.len(), "Submitting chat message");
        match callback(&message) {
            Ok(()) => Ok(SubmitOutcome::Submitted {
                message,
                delivered: true,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Chat callback failed");
                Err(ChatError::Callback(e))
            }
        }
    }

    /// Whether a submission callback is currently running.
    ///
    /// Independent of the input control: a host that disables the input
    /// itself does not make this true.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting_flag().load(Ordering::SeqCst)
    }
}
