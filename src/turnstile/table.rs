use super::symbols::{TurnstileAction, TurnstileEvent, TurnstileState};
use crate::builder::{BuildError, TableBuilder};
use crate::table::TransitionTable;
use std::sync::LazyLock;

/// Transition table type for the two-coin turnstile.
pub type TurnstileTable = TransitionTable<TurnstileState, TurnstileEvent, TurnstileAction>;

static TABLE: LazyLock<TurnstileTable> =
    LazyLock::new(|| build_table().expect("two-coin turnstile table has unique rows"));

/// The shared, immutable two-coin turnstile table.
///
/// | State    | Event | Next     | Actions           |
/// |----------|-------|----------|-------------------|
/// | Locked0  | Coin  | Locked1  |                   |
/// | Locked1  | Coin  | Unlocked | unlock            |
/// | Unlocked | Coin  | Unlocked | thankyou          |
/// | Locked0  | Pass  | Alarming | alarmOn           |
/// | Locked1  | Pass  | Alarming | alarmOn           |
/// | Unlocked | Pass  | Locked0  | lock              |
/// | Alarming | Reset | Locked0  | alarmOff, lock    |
pub fn transition_table() -> &'static TurnstileTable {
    &TABLE
}

fn build_table() -> Result<TurnstileTable, BuildError> {
    use TurnstileAction::*;
    use TurnstileEvent::*;
    use TurnstileState::*;

    TableBuilder::new()
        .transition(Locked0, Coin, Locked1, &[])
        .transition(Locked1, Coin, Unlocked, &[Unlock])
        .transition(Unlocked, Coin, Unlocked, &[Thankyou])
        .transition(Locked0, Pass, Alarming, &[AlarmOn])
        .transition(Locked1, Pass, Alarming, &[AlarmOn])
        .transition(Unlocked, Pass, Locked0, &[Lock])
        .transition(Alarming, Reset, Locked0, &[AlarmOff, Lock])
        .build()
}
