//! Immutable transition tables.
//!
//! A [`TransitionTable`] maps each (state, event) pair to at most one
//! [`TransitionEntry`]. Pairs with no entry are not malformed: lookup
//! reports them as [`Lookup::Unhandled`] and the dispatcher routes them to
//! the fallback.
//!
//! Tables are built with [`TableBuilder`](crate::builder::TableBuilder),
//! which rejects duplicate rows, and are never mutated afterwards.

mod entry;

pub use entry::TransitionEntry;

use crate::core::{Action, Event, State};
use std::collections::{HashMap, HashSet, VecDeque};

/// Outcome of a table lookup.
///
/// Exactly one variant applies to every (state, event) pair.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'t, S: State, E: Event, A: Action> {
    /// An entry is declared for the pair
    Matched(&'t TransitionEntry<S, E, A>),

    /// No entry is declared for the pair
    Unhandled,
}

impl<S: State, E: Event, A: Action> Lookup<'_, S, E, A> {
    /// Whether an entry was found.
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// Static mapping from (state, event) to the transition that fires.
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, E: Event, A: Action> {
    entries: Vec<TransitionEntry<S, E, A>>,
    index: HashMap<(S, E), usize>,
}

impl<S: State, E: Event, A: Action> TransitionTable<S, E, A> {
    /// Assemble a table from entries whose keys are already known to be unique.
    pub(crate) fn from_unique_entries(entries: Vec<TransitionEntry<S, E, A>>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.key(), i))
            .collect();
        Self { entries, index }
    }

    /// Find the entry for the pair (pure).
    pub fn lookup(&self, state: S, event: E) -> Lookup<'_, S, E, A> {
        match self.index.get(&(state, event)) {
            Some(&i) => {
                let entry = &self.entries[i];
                debug_assert!(entry.matches(state, event), "index out of sync");
                Lookup::Matched(entry)
            }
            None => Lookup::Unhandled,
        }
    }

    /// All entries, in declaration order.
    pub fn entries(&self) -> &[TransitionEntry<S, E, A>] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Events that have an entry from `state`, in declaration order.
    pub fn events_for(&self, state: S) -> Vec<E> {
        self.entries
            .iter()
            .filter(|entry| entry.from == state)
            .map(|entry| entry.event)
            .collect()
    }

    /// Every state reachable from `initial` by following entries.
    ///
    /// `initial` is always included and comes first; the rest follow in
    /// breadth-first discovery order.
    pub fn reachable_from(&self, initial: S) -> Vec<S> {
        let mut seen = HashSet::from([initial]);
        let mut order = vec![initial];
        let mut queue = VecDeque::from([initial]);

        while let Some(state) = queue.pop_front() {
            for entry in self.entries.iter().filter(|entry| entry.from == state) {
                if seen.insert(entry.to) {
                    order.push(entry.to);
                    queue.push_back(entry.to);
                }
            }
        }

        order
    }
}
