//! Core state machine types.
//!
//! - State definitions via the `State` trait
//! - Timestamped history of transitions

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
