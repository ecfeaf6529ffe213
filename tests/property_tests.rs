//! Property-based tests for table-driven dispatch.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated event sequences.

use fsm_dispatch::machine::{ActionSink, StateMachine, StepResult};
use fsm_dispatch::table::Lookup;
use fsm_dispatch::turnstile::{
    transition_table, TurnstileAction, TurnstileEvent, TurnstileState,
};
use proptest::prelude::*;

/// Sink call, in the order the machine made it.
#[derive(Clone, Debug, PartialEq)]
enum Call {
    Perform(TurnstileAction),
    Unhandled(TurnstileState, TurnstileEvent),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl ActionSink<TurnstileState, TurnstileEvent, TurnstileAction> for Recorder {
    fn perform(&mut self, action: TurnstileAction) {
        self.calls.push(Call::Perform(action));
    }

    fn unhandled_transition(&mut self, state: TurnstileState, event: TurnstileEvent) {
        self.calls.push(Call::Unhandled(state, event));
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..3u8) -> TurnstileEvent {
        match variant {
            0 => TurnstileEvent::Coin,
            1 => TurnstileEvent::Pass,
            _ => TurnstileEvent::Reset,
        }
    }
}

prop_compose! {
    fn arbitrary_state()(index in 0..TurnstileState::ALL.len()) -> TurnstileState {
        TurnstileState::ALL[index]
    }
}

proptest! {
    #[test]
    fn each_step_fires_entry_or_fallback(
        events in prop::collection::vec(arbitrary_event(), 0..64)
    ) {
        let table = transition_table();
        let mut machine =
            StateMachine::new(table, TurnstileState::Locked0, Recorder::default());

        for event in events {
            let before = machine.current_state();
            let calls_before = machine.sink().calls.len();

            let result = machine.process(event);
            let new_calls = &machine.sink().calls[calls_before..];

            match table.lookup(before, event) {
                Lookup::Matched(entry) => {
                    let expected: Vec<Call> =
                        entry.actions.iter().copied().map(Call::Perform).collect();
                    prop_assert_eq!(new_calls, expected.as_slice());
                    prop_assert_eq!(
                        result,
                        StepResult::Transitioned { from: before, to: entry.to, event }
                    );
                    prop_assert_eq!(machine.current_state(), entry.to);
                }
                Lookup::Unhandled => {
                    let expected = [Call::Unhandled(before, event)];
                    prop_assert_eq!(new_calls, &expected[..]);
                    prop_assert_eq!(result, StepResult::Unhandled { state: before, event });
                    prop_assert_eq!(machine.current_state(), before);
                }
            }
        }
    }

    #[test]
    fn state_stays_in_declared_set(
        events in prop::collection::vec(arbitrary_event(), 0..128)
    ) {
        let mut machine = StateMachine::new(
            transition_table(),
            TurnstileState::Locked0,
            Recorder::default(),
        );

        for event in events {
            let state = machine.process(event).state();
            prop_assert!(TurnstileState::ALL.contains(&state));
            prop_assert_eq!(state, machine.current_state());
        }
    }

    #[test]
    fn dispatch_is_deterministic(
        start in arbitrary_state(),
        events in prop::collection::vec(arbitrary_event(), 0..32)
    ) {
        let table = transition_table();
        let mut first = StateMachine::new(table, start, Recorder::default());
        let mut second = StateMachine::new(table, start, Recorder::default());

        let first_results = first.process_all(events.iter().copied());
        let second_results = second.process_all(events.iter().copied());

        prop_assert_eq!(first_results, second_results);
        prop_assert_eq!(first.into_sink().calls, second.into_sink().calls);
    }

    #[test]
    fn history_matches_transitioned_steps(
        events in prop::collection::vec(arbitrary_event(), 0..64)
    ) {
        let mut machine = StateMachine::with_history(
            transition_table(),
            TurnstileState::Locked0,
            Recorder::default(),
        );

        let results = machine.process_all(events);
        let fired: Vec<TurnstileEvent> = results
            .iter()
            .filter_map(|step| match step {
                StepResult::Transitioned { event, .. } => Some(*event),
                StepResult::Unhandled { .. } => None,
            })
            .collect();

        let history = machine.history().unwrap();
        prop_assert_eq!(history.events(), fired);
        if let Some(&last) = history.get_path().last() {
            prop_assert_eq!(last, machine.current_state());
        }
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TurnstileState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
