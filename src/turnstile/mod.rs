//! Two-coin turnstile access control.
//!
//! The turnstile admits one passage for every two coins. Passing early
//! raises an alarm that only `Reset` clears. Coins inserted while already
//! unlocked are acknowledged with a thank-you.
//!
//! # Example
//!
//! ```rust
//! use fsm_dispatch::turnstile::{Turnstile, TurnstileActions, TurnstileEvent, TurnstileState};
//!
//! #[derive(Default)]
//! struct Output(String);
//!
//! impl TurnstileActions for Output {
//!     fn unlock(&mut self) { self.0.push('U'); }
//!     fn lock(&mut self) { self.0.push('L'); }
//!     fn alarm_on(&mut self) { self.0.push('A'); }
//!     fn alarm_off(&mut self) { self.0.push('O'); }
//!     fn thankyou(&mut self) { self.0.push('T'); }
//!     fn unhandled_transition(&mut self, state: TurnstileState, event: TurnstileEvent) {
//!         self.0.push_str(&format!("X({state},{event})"));
//!     }
//! }
//!
//! let mut turnstile = Turnstile::new(Output::default());
//! turnstile.coin();
//! turnstile.coin();
//! turnstile.pass();
//!
//! assert_eq!(turnstile.actions().0, "UL");
//! assert_eq!(turnstile.state(), TurnstileState::Locked0);
//! ```

mod actions;
mod symbols;
mod table;

pub use actions::TurnstileActions;
pub use symbols::{TurnstileAction, TurnstileEvent, TurnstileState};
pub use table::{transition_table, TurnstileTable};

use crate::core::StateHistory;
use crate::machine::{StateMachine, StepResult};
use actions::ActionRouter;

/// Outcome of a single turnstile event.
pub type TurnstileStep = StepResult<TurnstileState, TurnstileEvent>;

/// A two-coin turnstile driving a caller-supplied [`TurnstileActions`].
///
/// Starts in [`TurnstileState::Locked0`].
pub struct Turnstile<K: TurnstileActions> {
    machine: TurnstileMachine<K>,
}

type TurnstileMachine<K> =
    StateMachine<'static, TurnstileState, TurnstileEvent, TurnstileAction, ActionRouter<K>>;

impl<K: TurnstileActions> Turnstile<K> {
    /// Create a turnstile in `Locked0` that reports to `actions`.
    pub fn new(actions: K) -> Self {
        Self {
            machine: StateMachine::new(
                transition_table(),
                TurnstileState::Locked0,
                ActionRouter(actions),
            ),
        }
    }

    /// Like [`new`](Self::new), additionally recording fired transitions.
    pub fn with_history(actions: K) -> Self {
        Self {
            machine: StateMachine::with_history(
                transition_table(),
                TurnstileState::Locked0,
                ActionRouter(actions),
            ),
        }
    }

    /// A coin was inserted.
    pub fn coin(&mut self) -> TurnstileStep {
        self.process(TurnstileEvent::Coin)
    }

    /// Someone walked through.
    pub fn pass(&mut self) -> TurnstileStep {
        self.process(TurnstileEvent::Pass)
    }

    /// An operator reset the turnstile.
    pub fn reset(&mut self) -> TurnstileStep {
        self.process(TurnstileEvent::Reset)
    }

    /// Dispatch an arbitrary turnstile event.
    pub fn process(&mut self, event: TurnstileEvent) -> TurnstileStep {
        self.machine.process(event)
    }

    /// Get current state (pure)
    pub fn state(&self) -> TurnstileState {
        self.machine.current_state()
    }

    /// Borrow the action receiver.
    pub fn actions(&self) -> &K {
        &self.machine.sink().0
    }

    /// Mutably borrow the action receiver.
    pub fn actions_mut(&mut self) -> &mut K {
        &mut self.machine.sink_mut().0
    }

    /// Consume the turnstile and return the action receiver.
    pub fn into_actions(self) -> K {
        self.machine.into_sink().0
    }

    /// Recorded transitions, when created with [`with_history`](Self::with_history).
    pub fn history(&self) -> Option<&StateHistory<TurnstileState, TurnstileEvent>> {
        self.machine.history()
    }

    /// Drain the recorded transitions; see [`StateMachine::take_history`].
    pub fn take_history(&mut self) -> Option<StateHistory<TurnstileState, TurnstileEvent>> {
        self.machine.take_history()
    }
}
