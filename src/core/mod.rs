//! Core state machine types.
//!
//! This module contains the symbol vocabulary shared by every machine:
//! - State, event, and action symbols via the `State`, `Event`, and `Action` traits
//! - Transition history tracking
//!
//! Nothing here performs side effects. Dispatch lives in [`crate::machine`].

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::{Action, Event, State};
