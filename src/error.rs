//! Chat cell error types

use thiserror::Error;

/// Error type a registered callback may return
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by the chat cell
///
/// Rendering, streaming and committing are total; only the user's callback
/// can fail, and that failure is handed back to whoever triggered the
/// submission after the input has been re-enabled.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat callback failed: {0}")]
    Callback(#[source] CallbackError),
}

impl ChatError {
    #[must_use]
    pub fn callback(err: impl Into<CallbackError>) -> Self {
        Self::Callback(err.into())
    }

    /// The error returned by the callback
    #[must_use]
    pub fn callback_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        match self {
            Self::Callback(err) => err.as_ref(),
        }
    }
}
