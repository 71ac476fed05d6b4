//! Static introspection of a machine's declared transitions.

use crate::core::{Signature, StateId};
use serde::Serialize;

/// Resolver of the declared action for one event type.
pub type Resolver<S> = fn(S) -> Signature<S>;

/// One row of a [`TransitionTable`]: the declared action of a state for each
/// event, in the table's event order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow<S> {
    pub state: S,
    pub actions: Vec<Signature<S>>,
}

/// The declared action of every (state, event) pair of a machine.
///
/// Built from static information only; no state or event is constructed.
/// Rows follow the state declaration order and columns follow the event
/// declaration order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransitionTable<S> {
    machine: &'static str,
    events: Vec<&'static str>,
    rows: Vec<TableRow<S>>,
}

impl<S: StateId> TransitionTable<S> {
    /// Resolve every declared state against each `(event name, resolver)`
    /// column.
    pub fn new(machine: &'static str, columns: &[(&'static str, Resolver<S>)]) -> Self {
        let rows = S::ALL
            .iter()
            .map(|&state| TableRow {
                state,
                actions: columns.iter().map(|(_, resolve)| resolve(state)).collect(),
            })
            .collect();

        Self {
            machine,
            events: columns.iter().map(|(name, _)| *name).collect(),
            rows,
        }
    }

    pub fn machine(&self) -> &'static str {
        self.machine
    }

    pub fn events(&self) -> &[&'static str] {
        &self.events
    }

    pub fn rows(&self) -> &[TableRow<S>] {
        &self.rows
    }

    /// Declared action of `state` for the event named `event`.
    pub fn lookup(&self, state: S, event: &str) -> Option<Signature<S>> {
        let column = self.events.iter().position(|name| *name == event)?;
        self.rows
            .get(state.index())
            .and_then(|row| row.actions.get(column).copied())
    }

    /// Every pair whose declared action may change the current state.
    pub fn transitions(&self) -> impl Iterator<Item = (S, &'static str, Signature<S>)> + '_ {
        self.rows.iter().flat_map(move |row| {
            self.events
                .iter()
                .zip(&row.actions)
                .filter(|(_, action)| action.target().is_some())
                .map(move |(event, action)| (row.state, *event, *action))
        })
    }
}
