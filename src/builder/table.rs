//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::core::{Action, Event, State};
use crate::table::{TransitionEntry, TransitionTable};
use std::collections::HashSet;
use tracing::debug;

/// Builder for constructing transition tables with a fluent API.
///
/// Rows are kept in declaration order. Validation happens in
/// [`build`](Self::build).
///
/// # Example
///
/// ```rust
/// use fsm_dispatch::builder::TableBuilder;
/// use fsm_dispatch::turnstile::{TurnstileAction, TurnstileEvent, TurnstileState};
///
/// let table = TableBuilder::new()
///     .transition(TurnstileState::Locked0, TurnstileEvent::Coin, TurnstileState::Unlocked, &[TurnstileAction::Unlock])
///     .transition(TurnstileState::Unlocked, TurnstileEvent::Pass, TurnstileState::Locked0, &[TurnstileAction::Lock])
///     .build()
///     .unwrap();
///
/// assert_eq!(table.len(), 2);
/// ```
pub struct TableBuilder<S: State, E: Event, A: Action> {
    entries: Vec<TransitionEntry<S, E, A>>,
}

impl<S: State, E: Event, A: Action> TableBuilder<S, E, A> {
    /// Create a new table builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Declare that `event` in state `from` performs `actions` in order and
    /// moves to `to`.
    pub fn transition(mut self, from: S, event: E, to: S, actions: &[A]) -> Self {
        self.entries.push(TransitionEntry::new(from, event, to, actions));
        self
    }

    /// Add a pre-built entry.
    pub fn add_entry(mut self, entry: TransitionEntry<S, E, A>) -> Self {
        self.entries.push(entry);
        self
    }

    /// Add multiple entries at once.
    pub fn entries(mut self, entries: Vec<TransitionEntry<S, E, A>>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Build the table.
    /// Returns an error if no rows were declared or two rows share a key.
    pub fn build(self) -> Result<TransitionTable<S, E, A>, BuildError> {
        if self.entries.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut keys = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !keys.insert(entry.key()) {
                return Err(BuildError::DuplicateTransition {
                    state: entry.from.name().to_string(),
                    event: entry.event.name().to_string(),
                });
            }
        }

        debug!(transitions = self.entries.len(), "transition table built");
        Ok(TransitionTable::from_unique_entries(self.entries))
    }
}

impl<S: State, E: Event, A: Action> Default for TableBuilder<S, E, A> {
    fn default() -> Self {
        Self::new()
    }
}
