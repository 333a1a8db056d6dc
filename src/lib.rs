//! Chat Cell - streaming chat display for notebook cells
//!
//! Renders a running conversation, takes single-line input, and shows an
//! assistant response incrementally before committing it to an append-only
//! transcript. All caller-supplied text is HTML-escaped before it reaches a
//! render target.

pub mod config;
pub mod display;
pub mod error;
pub mod markup;
pub mod runtime;
pub mod state_machine;
pub mod transcript;

pub use config::{BlankSubmissions, ChatConfig};
pub use display::{JsonDisplayTarget, TextInput};
pub use error::{CallbackError, ChatError};
pub use runtime::{ChatCell, InputControl, RenderTarget, SubmitOutcome};
pub use state_machine::LiveState;
pub use transcript::{Role, Transcript, TranscriptEntry};

/// Package version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::VERSION;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2);
        assert!(parts
            .iter()
            .take(2)
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())));
    }
}
