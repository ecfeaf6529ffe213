//! fsm-dispatch: a table-driven finite state machine dispatch engine
//!
//! A machine is an immutable transition table plus a single mutable
//! current state. Each event is looked up by (state, event); a matching
//! entry runs its actions in order against a caller-supplied sink and then
//! moves the machine, and an unmatched pair is reported to the sink's
//! `unhandled_transition` fallback without changing state.
//!
//! # Core Concepts
//!
//! - **Symbols**: closed, payload-free states, events, and actions via the
//!   `State`, `Event`, and `Action` traits (see [`symbol_enum!`])
//! - **Tables**: immutable (state, event) → (next state, actions) maps
//! - **Sinks**: injected capability objects that receive every side effect
//! - **Machines**: synchronous dispatchers that never fail
//!
//! The [`turnstile`] module instantiates the engine as a two-coin turnstile.
//!
//! # Example
//!
//! ```rust
//! use fsm_dispatch::builder::TableBuilder;
//! use fsm_dispatch::machine::{ActionSink, StateMachine};
//! use fsm_dispatch::symbol_enum;
//!
//! symbol_enum! {
//!     enum Door: State { Closed, Open }
//! }
//! symbol_enum! {
//!     enum Knock: Event { Push, Pull }
//! }
//! symbol_enum! {
//!     enum Creak: Action { Squeak = "squeak" }
//! }
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl ActionSink<Door, Knock, Creak> for Log {
//!     fn perform(&mut self, action: Creak) {
//!         self.0.push(action.to_string());
//!     }
//!     fn unhandled_transition(&mut self, state: Door, event: Knock) {
//!         self.0.push(format!("X({state},{event})"));
//!     }
//! }
//!
//! let table = TableBuilder::new()
//!     .transition(Door::Closed, Knock::Push, Door::Open, &[Creak::Squeak])
//!     .transition(Door::Open, Knock::Pull, Door::Closed, &[])
//!     .build()
//!     .unwrap();
//!
//! let mut machine = StateMachine::new(&table, Door::Closed, Log::default());
//! machine.process(Knock::Push);
//! machine.process(Knock::Push);
//!
//! assert_eq!(machine.current_state(), Door::Open);
//! assert_eq!(machine.sink().0, vec!["squeak", "X(Open,Push)"]);
//! ```

extern crate self as fsm_dispatch;

pub mod builder;
pub mod core;
pub mod machine;
pub mod table;
pub mod turnstile;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder, TableBuilder};
pub use crate::core::{Action, Event, State, StateHistory, StateTransition};
pub use machine::{ActionSink, StateMachine, StepResult};
pub use table::{Lookup, TransitionEntry, TransitionTable};

// Used by `symbol_enum!` expansions.
#[doc(hidden)]
pub use serde;
