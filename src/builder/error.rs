//! Build errors for transition tables and state machines.

use thiserror::Error;

/// Errors that can occur when building tables and machines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Duplicate transition for state '{state}' on event '{event}'")]
    DuplicateTransition { state: String, event: String },
}
