//! Live response state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions: the
//! transition function computes the next state and the render effects, and
//! the component applies those effects to its render targets.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::LiveState;
pub use transition::{transition, TransitionResult};
