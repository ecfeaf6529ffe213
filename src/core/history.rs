//! State transition history tracking.
//!
//! A machine built with history recording enabled appends one
//! [`StateTransition`] per fired table entry. Unhandled events never
//! appear in the history because they do not change state.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single fired transition.
///
/// # Example
///
/// ```rust
/// use fsm_dispatch::core::StateTransition;
/// use fsm_dispatch::turnstile::{TurnstileEvent, TurnstileState};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: TurnstileState::Locked0,
///     to: TurnstileState::Locked1,
///     event: TurnstileEvent::Coin,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.event, TurnstileEvent::Coin);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, E: Event> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that selected the transition
    pub event: E,
    /// When the transition completed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// [`record`](Self::record) is pure and returns a new history. The owning
/// machine appends in place with [`push`](Self::push).
///
/// # Example
///
/// ```rust
/// use fsm_dispatch::core::{StateHistory, StateTransition};
/// use fsm_dispatch::turnstile::{TurnstileEvent, TurnstileState};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: TurnstileState::Locked0,
///         to: TurnstileState::Locked1,
///         event: TurnstileEvent::Coin,
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: TurnstileState::Locked1,
///         to: TurnstileState::Unlocked,
///         event: TurnstileEvent::Coin,
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Locked0 -> Locked1 -> Unlocked
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, E: Event> {
    transitions: Vec<StateTransition<S, E>>,
}

impl<S: State, E: Event> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateHistory<S, E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S, E>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: StateTransition<S, E>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the
    /// `to` state of every transition, in order.
    pub fn get_path(&self) -> Vec<S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Events that fired a transition, in order.
    pub fn events(&self) -> Vec<E> {
        self.transitions.iter().map(|t| t.event).collect()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S, E>] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
