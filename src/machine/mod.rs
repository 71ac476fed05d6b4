//! The dispatch engine.
//!
//! A machine owns one instance of every state type and a tag naming the
//! current one. Handling an event is always the same three steps, written
//! once in [`dispatch`]:
//!
//! 1. find the current state
//! 2. call its [`Handle<E>`](crate::Handle) for the event's type
//! 3. apply the returned [`Action`]
//!
//! The machine-specific part (matching on the state tag, borrowing the right
//! field) is generated by [`state_machine!`](crate::state_machine) as an
//! implementation of [`Dispatch<E>`].

mod macros;
mod table;

pub use table::{Resolver, TableRow, TransitionTable};

use crate::core::{Action, Signature, State, StateId};

/// A machine with a closed set of states and a closed set of events.
pub trait Machine: Sized {
    /// The machine's state id enum.
    type StateId: StateId;

    /// The machine's closed event enum.
    type Event;

    /// Name of the machine, as written in its definition.
    const NAME: &'static str;

    /// Names of the declared event types, in declaration order.
    const EVENTS: &'static [&'static str];

    /// The currently active state.
    fn current(&self) -> Self::StateId;

    /// Dispatch one event to the current state.
    fn handle<E: Into<Self::Event>>(&mut self, event: E);

    /// Declared action of every (state, event) pair.
    fn transition_table() -> TransitionTable<Self::StateId>;

    /// Declared action of `state` for events of type `E`.
    ///
    /// Needs neither a state instance nor an event value.
    fn action_of<E>(state: Self::StateId) -> Signature<Self::StateId>
    where
        Self: Dispatch<E>,
    {
        <Self as Dispatch<E>>::resolve(state)
    }
}

/// Machine-specific routing of events of type `E` to state handlers.
///
/// Implemented by [`state_machine!`](crate::state_machine) for every `E` that
/// all of the machine's states handle.
pub trait Dispatch<E>: Machine {
    /// Run the current state's handler.
    fn react(&mut self, event: &E) -> Action<Self::StateId>;

    /// Run the current state's exit hook.
    fn leave(&mut self, event: &E);

    /// Make `target` current and run its entry hook.
    fn enter(&mut self, target: Self::StateId, event: &E) -> Action<Self::StateId>;

    /// Declared action of `state` for `E`.
    fn resolve(state: Self::StateId) -> Signature<Self::StateId>;
}

/// Access to the single owned instance of state type `T`.
pub trait Owns<T: State> {
    /// The machine's instance of `T`.
    fn state(&self) -> &T;
}

/// Handle `event` on `machine`: run the current state's handler and apply
/// the action it returns.
pub fn dispatch<M, E>(machine: &mut M, event: &E)
where
    M: Dispatch<E>,
{
    let current = machine.current();
    log::trace!(
        "{}: {} handles {}",
        M::NAME,
        current,
        std::any::type_name::<E>()
    );

    let action = machine.react(event);
    debug_assert!(
        M::resolve(current).admits(&action),
        "{}: {} returned {:?} for {} but declares {}",
        M::NAME,
        current,
        action,
        std::any::type_name::<E>(),
        M::resolve(current),
    );

    action.apply(machine, event);
}
