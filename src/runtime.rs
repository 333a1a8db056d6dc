//! Runtime for a chat cell
//!
//! Owns the live state, the transcript and the callback slot, and applies
//! state machine effects to the host's render targets.

mod component;
mod coordinator;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use component::{Callback, ChatCell};
pub use coordinator::{InputGuard, SubmitOutcome};
pub use traits::*;
