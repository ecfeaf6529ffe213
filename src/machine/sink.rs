//! The capability through which a machine performs side effects.

use crate::core::{Action, Event, State};

/// Receiver of the side effects a [`StateMachine`](super::StateMachine) emits.
///
/// The machine never constructs a sink and has no knowledge of what its
/// operations do. Integrators supply one and observe its effects.
///
/// # Example
///
/// ```rust
/// use fsm_dispatch::machine::ActionSink;
/// use fsm_dispatch::turnstile::{TurnstileAction, TurnstileEvent, TurnstileState};
///
/// #[derive(Default)]
/// struct Log(Vec<String>);
///
/// impl ActionSink<TurnstileState, TurnstileEvent, TurnstileAction> for Log {
///     fn perform(&mut self, action: TurnstileAction) {
///         self.0.push(format!("{action}"));
///     }
///
///     fn unhandled_transition(&mut self, state: TurnstileState, event: TurnstileEvent) {
///         self.0.push(format!("X({state},{event})"));
///     }
/// }
/// ```
pub trait ActionSink<S: State, E: Event, A: Action> {
    /// Perform one action listed by a matched transition entry.
    fn perform(&mut self, action: A);

    /// Called instead of any action when no entry matches the pair.
    fn unhandled_transition(&mut self, state: S, event: E);
}

impl<S, E, A, K> ActionSink<S, E, A> for &mut K
where
    S: State,
    E: Event,
    A: Action,
    K: ActionSink<S, E, A> + ?Sized,
{
    fn perform(&mut self, action: A) {
        (**self).perform(action);
    }

    fn unhandled_transition(&mut self, state: S, event: E) {
        (**self).unhandled_transition(state, event);
    }
}
