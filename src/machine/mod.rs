//! Synchronous event dispatch.
//!
//! This module is the imperative shell around the pure table: a
//! [`StateMachine`] looks up each event in its [`TransitionTable`](crate::table::TransitionTable)
//! and delivers the resulting side effects to an injected [`ActionSink`].
//!
//! # Key Concepts
//!
//! - **Dispatch**: `process(event)` either fires exactly one entry or the fallback
//! - **Ordering**: actions run in declared order, then the state changes
//! - **Sinks**: all side effects go through a caller-supplied capability object

mod sink;
mod state_machine;

pub use sink::ActionSink;
pub use state_machine::{StateMachine, StepResult};
