//! Transition entries: one row of a transition table.

use crate::core::{Action, Event, State};
use serde::{Deserialize, Serialize};

/// A transition from one state to another, selected by an event.
///
/// The listed actions run in order before the machine moves to `to`.
/// An entry with no actions is a silent state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionEntry<S: State, E: Event, A: Action> {
    pub from: S,
    pub event: E,
    pub to: S,
    pub actions: Vec<A>,
}

impl<S: State, E: Event, A: Action> TransitionEntry<S, E, A> {
    /// Create an entry; `actions` are copied in order.
    pub fn new(from: S, event: E, to: S, actions: &[A]) -> Self {
        Self {
            from,
            event,
            to,
            actions: actions.to_vec(),
        }
    }

    /// Check if this entry fires for the given state and event (pure)
    pub fn matches(&self, state: S, event: E) -> bool {
        self.from == state && self.event == event
    }

    /// The (state, event) pair this entry is keyed on.
    pub fn key(&self) -> (S, E) {
        (self.from, self.event)
    }

    /// Whether the entry leaves the machine in the state it fired from.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}
