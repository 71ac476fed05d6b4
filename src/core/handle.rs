//! Per (state, event) handler slots.

use super::action::{Action, Signature};
use super::state::State;

/// How a state reacts to events of type `E`.
///
/// Every state of a machine implements `Handle<E>` for every event type the
/// machine declares; a missing impl is a compile error at the machine
/// definition. All items have defaults, so an empty impl means "this state
/// ignores `E`" (see [`by_default!`](crate::by_default)).
///
/// Handlers that only pick a target are best written with [`on!`](crate::on),
/// which derives [`ACTION`](Handle::ACTION) and [`handle`](Handle::handle)
/// from one declaration. A hand-written `handle` must declare what it may
/// return through `ACTION` itself; dispatch checks the two agree in debug
/// builds.
///
/// # Example
///
/// ```rust
/// use static_fsm::{state_machine, Action, Handle, Signature};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug)]
/// pub struct Push;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// pub struct Dark;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// pub struct Lit {
///     presses: u32,
/// }
///
/// state_machine! {
///     pub machine Switch {
///         states SwitchState {
///             Off(Dark),
///             On(Lit),
///         }
///         events SwitchEvent {
///             Push(Push),
///         }
///     }
/// }
///
/// impl Handle<Push> for Dark {
///     const ACTION: Signature<SwitchState> = Signature::TransitionTo(SwitchState::On);
///
///     fn handle(&mut self, _: &Push) -> Action<SwitchState> {
///         Action::TransitionTo(SwitchState::On)
///     }
/// }
///
/// impl Handle<Push> for Lit {
///     const ACTION: Signature<SwitchState> = Signature::TransitionTo(SwitchState::Off);
///
///     fn handle(&mut self, _: &Push) -> Action<SwitchState> {
///         Action::TransitionTo(SwitchState::Off)
///     }
///
///     fn on_enter(&mut self, _: &Push) -> Action<SwitchState> {
///         self.presses += 1;
///         Action::Nothing
///     }
/// }
///
/// let mut switch = Switch::new(Dark, Lit { presses: 0 });
/// switch.handle(Push);
/// switch.handle(Push);
/// switch.handle(Push);
/// assert_eq!(switch.current(), SwitchState::On);
/// assert_eq!(switch.state::<Lit>().presses, 2);
/// ```
pub trait Handle<E>: State {
    /// Declared action kind of [`handle`](Handle::handle).
    const ACTION: Signature<Self::Id> = Signature::Nothing;

    /// React to `event` while this state is current.
    fn handle(&mut self, _event: &E) -> Action<Self::Id> {
        Action::Nothing
    }

    /// Called when a transition triggered by `event` enters this state.
    ///
    /// Returning a transition chains a further move within the same
    /// dispatch.
    fn on_enter(&mut self, _event: &E) -> Action<Self::Id> {
        Action::Nothing
    }

    /// Called when a transition triggered by `event` leaves this state.
    fn on_exit(&mut self, _event: &E) {}
}

/// Declare that a state ignores the listed event types.
///
/// Expands to one empty [`Handle`] impl per event type, so the state
/// answers each of them with [`Action::Nothing`] and runs no hooks.
///
/// ```rust,ignore
/// by_default!(OpenState: OpenEvent, LockEvent, UnlockEvent);
/// ```
#[macro_export]
macro_rules! by_default {
    ($state:ty: $($event:ty),+ $(,)?) => {
        $(
            impl $crate::Handle<$event> for $state {}
        )+
    };
}

/// Declare a handler whose action is fixed by its declaration.
///
/// Generates both the [`ACTION`](Handle::ACTION) signature and the
/// [`handle`](Handle::handle) body, so the transition table reports exactly
/// what the handler returns.
///
/// ```rust,ignore
/// on!(ClosedState: OpenEvent => TransitionTo(DoorState::Open));
/// on!(LockedState: UnlockEvent => Maybe(DoorState::Closed) if |locked, unlock| unlock.key == locked.key);
/// ```
///
/// The guard of `Maybe` gets the state and the event by shared reference.
/// Hooks for the same event go in a trailing block:
///
/// ```rust,ignore
/// on!(Lit: Push => TransitionTo(SwitchState::Off) {
///     fn on_enter(&mut self, _: &Push) -> Action<SwitchState> {
///         self.presses += 1;
///         Action::Nothing
///     }
/// });
/// ```
#[macro_export]
macro_rules! on {
    ($state:ty: $event:ty => TransitionTo($target:expr) $({ $($hooks:tt)* })?) => {
        impl $crate::Handle<$event> for $state {
            const ACTION: $crate::Signature<<$state as $crate::State>::Id> =
                $crate::Signature::TransitionTo($target);

            fn handle(&mut self, _: &$event) -> $crate::Action<<$state as $crate::State>::Id> {
                $crate::Action::TransitionTo($target)
            }

            $($($hooks)*)?
        }
    };

    ($state:ty: $event:ty => Maybe($target:expr) if $guard:expr $(, { $($hooks:tt)* })?) => {
        impl $crate::Handle<$event> for $state {
            const ACTION: $crate::Signature<<$state as $crate::State>::Id> =
                $crate::Signature::Maybe($target);

            fn handle(&mut self, event: &$event) -> $crate::Action<<$state as $crate::State>::Id> {
                let guard: fn(&$state, &$event) -> bool = $guard;
                $crate::Action::maybe(guard(self, event), $target)
            }

            $($($hooks)*)?
        }
    };
}
