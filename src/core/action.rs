//! Actions returned by state handlers.
//!
//! An [`Action`] is what a state decides to do about one event. Its static
//! counterpart, [`Signature`], is what the state *declares* it may do, and is
//! what introspection reports without running any handler.

use super::state::StateId;
use crate::machine::Dispatch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Effect of handling one event in one state.
///
/// # Example
///
/// ```rust
/// use static_fsm::Action;
///
/// let unlocked: Action<&str> = Action::maybe(1234 == 1234, "Closed");
/// assert_eq!(unlocked.target(), Some("Closed"));
///
/// let rejected: Action<&str> = Action::maybe(2 == 1234, "Closed");
/// assert_eq!(rejected.target(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action<S> {
    /// Stay in the current state.
    Nothing,

    /// Leave the current state and enter `S`.
    TransitionTo(S),

    /// A transition to `S` or nothing, decided by the handler from the
    /// event's data.
    Maybe(Option<S>),
}

impl<S: Copy> Action<S> {
    /// Transition to `target` only if `condition` holds.
    pub fn maybe(condition: bool, target: S) -> Self {
        Action::Maybe(condition.then_some(target))
    }

    /// The state this action moves to, if any.
    pub fn target(&self) -> Option<S> {
        match self {
            Action::Nothing => None,
            Action::TransitionTo(target) => Some(*target),
            Action::Maybe(target) => *target,
        }
    }
}

impl<S: StateId> Action<S> {
    /// Apply this action to `machine`, which is handling `event`.
    ///
    /// A transition runs the exit hook of the current state, switches the
    /// current state, then runs the entry hook of the new one. An entry hook
    /// may itself return a transition; chained transitions are applied in
    /// the same call until a hook returns no target.
    pub fn apply<M, E>(self, machine: &mut M, event: &E)
    where
        M: Dispatch<E, StateId = S>,
    {
        let mut next = self.target();
        while let Some(target) = next {
            let from = machine.current();
            machine.leave(event);
            let chained = machine.enter(target, event);
            log::debug!("{}: {} -> {}", M::NAME, from, target);
            next = chained.target();
        }
    }
}

/// Statically declared kind of action for one (state, event) pair.
///
/// Signatures describe handlers without running them, so a machine's
/// transition table can be inspected without constructing a state or an
/// event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signature<S> {
    /// The handler never transitions.
    Nothing,

    /// The handler always transitions to `S`.
    TransitionTo(S),

    /// The handler transitions to `S` depending on the event.
    Maybe(S),
}

impl<S: PartialEq> Signature<S> {
    /// Check that a runtime action is one this signature describes.
    ///
    /// ```rust
    /// use static_fsm::{Action, Signature};
    ///
    /// let declared = Signature::Maybe(1u8);
    /// assert!(declared.admits(&Action::Nothing));
    /// assert!(declared.admits(&Action::Maybe(Some(1))));
    /// assert!(!declared.admits(&Action::TransitionTo(2)));
    /// ```
    pub fn admits(&self, action: &Action<S>) -> bool {
        match (self, action) {
            (Signature::Nothing, Action::Nothing) => true,
            (Signature::Nothing, _) => false,
            (Signature::TransitionTo(declared), Action::TransitionTo(target)) => declared == target,
            (Signature::TransitionTo(_), _) => false,
            (Signature::Maybe(_), Action::Nothing | Action::Maybe(None)) => true,
            (Signature::Maybe(declared), Action::TransitionTo(target) | Action::Maybe(Some(target))) => {
                declared == target
            }
        }
    }

    /// The state this signature may move to.
    pub fn target(&self) -> Option<&S> {
        match self {
            Signature::Nothing => None,
            Signature::TransitionTo(target) | Signature::Maybe(target) => Some(target),
        }
    }
}

impl<S: StateId> fmt::Display for Signature<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signature::Nothing => f.write_str("Nothing"),
            Signature::TransitionTo(target) => write!(f, "TransitionTo<{}>", target.name()),
            Signature::Maybe(target) => write!(f, "Maybe<TransitionTo<{}>>", target.name()),
        }
    }
}
