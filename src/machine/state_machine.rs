//! Table-driven dispatcher.

use super::sink::ActionSink;
use crate::core::{Action, Event, State, StateHistory, StateTransition};
use crate::table::{Lookup, TransitionTable};
use chrono::Utc;
use tracing::{debug, trace};

/// Result of processing a single event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult<S: State, E: Event> {
    /// A table entry fired; its actions ran and the machine moved to `to`
    Transitioned { from: S, to: S, event: E },

    /// No entry matched; the sink's fallback ran and the state is unchanged
    Unhandled { state: S, event: E },
}

impl<S: State, E: Event> StepResult<S, E> {
    /// Whether a table entry fired.
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// Whether the fallback ran.
    pub fn is_unhandled(&self) -> bool {
        matches!(self, Self::Unhandled { .. })
    }

    /// The machine's state after the step.
    pub fn state(&self) -> S {
        match self {
            Self::Transitioned { to, .. } => *to,
            Self::Unhandled { state, .. } => *state,
        }
    }
}

/// Synchronous state machine driven by a [`TransitionTable`].
///
/// The machine owns its current state and its sink. `process` takes
/// `&mut self`, so an action cannot call back into the machine that is
/// dispatching it. A sink that tries to hold on to its own machine does
/// not borrow-check:
///
/// ```compile_fail
/// use fsm_dispatch::machine::{ActionSink, StateMachine};
/// use fsm_dispatch::turnstile::{transition_table, TurnstileAction, TurnstileEvent, TurnstileState};
///
/// type Machine<'m> =
///     StateMachine<'static, TurnstileState, TurnstileEvent, TurnstileAction, Reentrant<'m>>;
///
/// struct Reentrant<'m> {
///     machine: Option<&'m mut Machine<'m>>,
/// }
///
/// impl ActionSink<TurnstileState, TurnstileEvent, TurnstileAction> for Reentrant<'_> {
///     fn perform(&mut self, _action: TurnstileAction) {
///         if let Some(machine) = self.machine.as_mut() {
///             machine.process(TurnstileEvent::Pass);
///         }
///     }
///
///     fn unhandled_transition(&mut self, _state: TurnstileState, _event: TurnstileEvent) {}
/// }
///
/// let mut machine = StateMachine::new(
///     transition_table(),
///     TurnstileState::Locked0,
///     Reentrant { machine: None },
/// );
/// machine.sink_mut().machine = Some(&mut machine);
/// machine.process(TurnstileEvent::Coin);
/// ```
pub struct StateMachine<'t, S: State, E: Event, A: Action, K> {
    table: &'t TransitionTable<S, E, A>,
    current: S,
    sink: K,
    history: Option<StateHistory<S, E>>,
}

impl<'t, S, E, A, K> StateMachine<'t, S, E, A, K>
where
    S: State,
    E: Event,
    A: Action,
    K: ActionSink<S, E, A>,
{
    /// Create a machine in `initial`, without history recording.
    pub fn new(table: &'t TransitionTable<S, E, A>, initial: S, sink: K) -> Self {
        Self {
            table,
            current: initial,
            sink,
            history: None,
        }
    }

    /// Create a machine in `initial` that records every fired transition.
    pub fn with_history(table: &'t TransitionTable<S, E, A>, initial: S, sink: K) -> Self {
        Self {
            history: Some(StateHistory::new()),
            ..Self::new(table, initial, sink)
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> S {
        self.current
    }

    /// The table this machine dispatches against.
    pub fn table(&self) -> &'t TransitionTable<S, E, A> {
        self.table
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Mutably borrow the sink between events.
    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    /// Consume the machine and hand the sink back to the caller.
    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Recorded transitions, or `None` when recording is disabled.
    pub fn history(&self) -> Option<&StateHistory<S, E>> {
        self.history.as_ref()
    }

    /// Hand back the recorded transitions and start a fresh history.
    ///
    /// Recording stays enabled. Returns `None` when recording is disabled.
    pub fn take_history(&mut self) -> Option<StateHistory<S, E>> {
        self.history.as_mut().map(std::mem::take)
    }

    /// Dispatch one event.
    ///
    /// On a match, every listed action is performed in order and only then
    /// does the current state change. Otherwise the sink's
    /// `unhandled_transition` runs once and the state is left as is.
    pub fn process(&mut self, event: E) -> StepResult<S, E> {
        let table = self.table;
        let from = self.current;

        let entry = match table.lookup(from, event) {
            Lookup::Matched(entry) => entry,
            Lookup::Unhandled => {
                debug!(
                    state = from.name(),
                    event = event.name(),
                    "unhandled transition"
                );
                self.sink.unhandled_transition(from, event);
                return StepResult::Unhandled { state: from, event };
            }
        };

        trace!(
            state = from.name(),
            event = event.name(),
            actions = entry.actions.len(),
            self_loop = entry.is_self_loop(),
            "transition matched"
        );
        for &action in &entry.actions {
            self.sink.perform(action);
        }

        self.current = entry.to;
        if let Some(history) = self.history.as_mut() {
            history.push(StateTransition {
                from,
                to: entry.to,
                event,
                timestamp: Utc::now(),
            });
        }
        debug!(
            from = from.name(),
            to = entry.to.name(),
            event = event.name(),
            "transition complete"
        );

        StepResult::Transitioned {
            from,
            to: entry.to,
            event,
        }
    }

    /// Dispatch each event in turn, returning one result per event.
    pub fn process_all<I>(&mut self, events: I) -> Vec<StepResult<S, E>>
    where
        I: IntoIterator<Item = E>,
    {
        events.into_iter().map(|event| self.process(event)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TableBuilder;
    use crate::symbol_enum;

    symbol_enum! {
        enum Light: State {
            Off,
            On,
            Broken,
        }
    }

    symbol_enum! {
        enum Switch: Event {
            Flip,
            Smash,
        }
    }

    symbol_enum! {
        enum Effect: Action {
            Glow = "glow",
            Dim = "dim",
            Spark = "spark",
        }
    }

    /// Records every sink call in order.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl ActionSink<Light, Switch, Effect> for Recorder {
        fn perform(&mut self, action: Effect) {
            self.calls.push(action.to_string());
        }

        fn unhandled_transition(&mut self, state: Light, event: Switch) {
            self.calls.push(format!("X({state},{event})"));
        }
    }

    fn table() -> TransitionTable<Light, Switch, Effect> {
        TableBuilder::new()
            .transition(Light::Off, Switch::Flip, Light::On, &[Effect::Glow])
            .transition(Light::On, Switch::Flip, Light::Off, &[Effect::Dim])
            .transition(
                Light::On,
                Switch::Smash,
                Light::Broken,
                &[Effect::Spark, Effect::Dim],
            )
            .build()
            .unwrap()
    }

    #[test]
    fn matched_transition_runs_actions_then_moves() {
        let table = table();
        let mut machine = StateMachine::new(&table, Light::Off, Recorder::default());

        let result = machine.process(Switch::Flip);

        assert_eq!(
            result,
            StepResult::Transitioned {
                from: Light::Off,
                to: Light::On,
                event: Switch::Flip
            }
        );
        assert!(result.is_transitioned());
        assert!(!result.is_unhandled());
        assert_eq!(machine.current_state(), Light::On);
        assert_eq!(machine.sink().calls, vec!["glow"]);
    }

    #[test]
    fn actions_run_in_declared_order() {
        let table = table();
        let mut machine = StateMachine::new(&table, Light::On, Recorder::default());

        machine.process(Switch::Smash);

        assert_eq!(machine.sink().calls, vec!["spark", "dim"]);
        assert_eq!(machine.current_state(), Light::Broken);
    }

    #[test]
    fn unmatched_pair_calls_fallback_once_and_keeps_state() {
        let table = table();
        let mut machine = StateMachine::new(&table, Light::Off, Recorder::default());

        let result = machine.process(Switch::Smash);

        assert!(result.is_unhandled());
        assert!(!result.is_transitioned());
        assert_eq!(result.state(), Light::Off);
        assert_eq!(machine.current_state(), Light::Off);
        assert_eq!(machine.sink().calls, vec!["X(Off,Smash)"]);
    }

    #[test]
    fn terminal_state_rejects_everything() {
        let table = table();
        let mut machine = StateMachine::new(&table, Light::Broken, Recorder::default());

        let results = machine.process_all([Switch::Flip, Switch::Smash]);

        assert!(results.iter().all(StepResult::is_unhandled));
        assert_eq!(
            machine.into_sink().calls,
            vec!["X(Broken,Flip)", "X(Broken,Smash)"]
        );
    }

    #[test]
    fn borrowed_sink_is_inspectable_afterwards() {
        let table = table();
        let mut recorder = Recorder::default();

        {
            let mut machine = StateMachine::new(&table, Light::Off, &mut recorder);
            machine.process_all([Switch::Flip, Switch::Flip, Switch::Flip]);
            assert_eq!(machine.current_state(), Light::On);
        }

        assert_eq!(recorder.calls, vec!["glow", "dim", "glow"]);
    }

    #[test]
    fn history_disabled_by_default() {
        let table = table();
        let mut machine = StateMachine::new(&table, Light::Off, Recorder::default());
        machine.process(Switch::Flip);

        assert!(machine.history().is_none());
    }

    #[test]
    fn history_records_only_fired_transitions() {
        let table = table();
        let mut machine = StateMachine::with_history(&table, Light::Off, Recorder::default());

        machine.process_all([Switch::Smash, Switch::Flip, Switch::Smash, Switch::Flip]);

        let history = machine.history().unwrap();
        assert_eq!(history.get_path(), vec![Light::Off, Light::On, Light::Broken]);
        assert_eq!(history.events(), vec![Switch::Flip, Switch::Smash]);
    }

    #[test]
    fn take_history_drains_and_keeps_recording() {
        let table = table();
        let mut machine = StateMachine::with_history(&table, Light::Off, Recorder::default());
        machine.process_all([Switch::Flip, Switch::Flip]);

        let taken = machine.take_history().unwrap();
        assert_eq!(taken.events(), vec![Switch::Flip, Switch::Flip]);
        assert!(machine.history().unwrap().is_empty());

        machine.process(Switch::Flip);
        let history = machine.history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.get_path(), vec![Light::Off, Light::On]);
    }

    #[test]
    fn take_history_without_recording_is_none() {
        let table = table();
        let mut machine = StateMachine::new(&table, Light::Off, Recorder::default());
        machine.process(Switch::Flip);

        assert!(machine.take_history().is_none());
        assert!(machine.history().is_none());
    }

    #[test]
    fn sink_mut_allows_reset_between_events() {
        let table = table();
        let mut machine = StateMachine::new(&table, Light::Off, Recorder::default());

        machine.process(Switch::Flip);
        machine.sink_mut().calls.clear();
        machine.process(Switch::Flip);

        assert_eq!(machine.sink().calls, vec!["dim"]);
    }
}
