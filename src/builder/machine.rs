//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Action, Event, State};
use crate::machine::{ActionSink, StateMachine};
use crate::table::TransitionTable;

/// Builder for constructing state machines over a shared table.
pub struct StateMachineBuilder<'t, S: State, E: Event, A: Action> {
    table: &'t TransitionTable<S, E, A>,
    initial: Option<S>,
    record_history: bool,
}

impl<'t, S: State, E: Event, A: Action> StateMachineBuilder<'t, S, E, A> {
    /// Create a new builder for machines driven by `table`.
    pub fn new(table: &'t TransitionTable<S, E, A>) -> Self {
        Self {
            table,
            initial: None,
            record_history: false,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Record every fired transition (off by default).
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Build the state machine around the supplied sink.
    /// Returns an error if the initial state is missing.
    pub fn build<K>(self, sink: K) -> Result<StateMachine<'t, S, E, A, K>, BuildError>
    where
        K: ActionSink<S, E, A>,
    {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let machine = if self.record_history {
            StateMachine::with_history(self.table, initial, sink)
        } else {
            StateMachine::new(self.table, initial, sink)
        };
        Ok(machine)
    }
}
