//! Symbol traits for state machine states, events, and actions.
//!
//! States, events, and actions are closed sets of payload-free symbols.
//! Implementations are expected to be fieldless enums, usually generated
//! with [`symbol_enum!`](crate::symbol_enum).

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// All methods are pure. A state is a plain value describing the current
/// position of a machine; exactly one is current at any time.
///
/// # Required Traits
///
/// - `Copy`: states are symbols and are passed by value
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states appear in serializable history
///
/// # Example
///
/// ```rust
/// use fsm_dispatch::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Closed.name(), "Closed");
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;
}

/// Trait for events delivered to a state machine.
///
/// Events carry no payload; the pair (current state, event) alone selects
/// the transition.
pub trait Event:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &'static str;
}

/// Trait for action identifiers listed in transition entries.
///
/// Each identifier maps to exactly one operation of an
/// [`ActionSink`](crate::machine::ActionSink).
pub trait Action:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the action's name for display/logging.
    fn name(&self) -> &'static str;
}
