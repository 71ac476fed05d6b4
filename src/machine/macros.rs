//! Macro for declaring a machine.

/// Declare a state machine.
///
/// ```text
/// state_machine! {
///     pub machine Door {
///         states DoorState {
///             Closed(ClosedState),
///             Open(OpenState),
///             Locked(LockedState),
///         }
///         events DoorEvent {
///             Open(OpenEvent),
///             Close(CloseEvent),
///             Lock(LockEvent),
///             Unlock(UnlockEvent),
///         }
///     }
/// }
/// ```
///
/// generates:
///
/// - `enum DoorState { Closed, Open, Locked }` implementing
///   [`StateId`](crate::StateId), and a [`State`](crate::State) impl for each
///   state type
/// - `enum DoorEvent` with one variant per event type and a `From` impl for
///   each, so only declared event types can reach `Door::handle`
/// - `struct Door` owning one instance of each state type, with
///   `Door::new(closed, open, locked)` taking them in declaration order. The
///   first declared state is the initial one.
/// - [`Machine`](crate::Machine), [`Dispatch<E>`](crate::Dispatch) and
///   [`Owns<T>`](crate::Owns) impls
///
/// Every state type must implement [`Handle<E>`](crate::Handle) for every
/// event type, and must derive `Clone`, `PartialEq`, `Debug`, `Serialize` and
/// `Deserialize`. Event types must derive `Clone` and `Debug`. The calling
/// crate needs `serde` as a dependency.
#[macro_export]
macro_rules! state_machine {
    (@define
        [$(#[$meta:meta])*] $vis:vis $machine:ident
        initial $initial:ident;
        states $state_id:ident { $($state:ident($state_ty:ty)),+ }
        events $event_enum:ident { $($event:ident($event_ty:ty)),+ }
    ) => {
        /// States of the machine, in declaration order.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $state_id {
            $($state),+
        }

        impl $crate::StateId for $state_id {
            const ALL: &'static [Self] = &[$(Self::$state),+];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$state => stringify!($state)),+
                }
            }
        }

        impl ::core::fmt::Display for $state_id {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::StateId::name(self))
            }
        }

        /// Events the machine accepts.
        #[derive(Clone, Debug)]
        $vis enum $event_enum {
            $($event($event_ty)),+
        }

        impl $event_enum {
            /// Name of the event's variant.
            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$event(_) => stringify!($event)),+
                }
            }
        }

        $(
            impl ::core::convert::From<$event_ty> for $event_enum {
                fn from(event: $event_ty) -> Self {
                    Self::$event(event)
                }
            }
        )+

        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        #[allow(non_snake_case)]
        $vis struct $machine {
            current: $state_id,
            $($state: $state_ty),+
        }

        $(
            impl $crate::State for $state_ty {
                type Id = $state_id;
                const ID: $state_id = $state_id::$state;
            }

            impl $crate::Owns<$state_ty> for $machine {
                fn state(&self) -> &$state_ty {
                    &self.$state
                }
            }
        )+

        impl $machine {
            /// Build the machine from one instance of each state, in
            /// declaration order. The first state is current.
            #[allow(non_snake_case, clippy::too_many_arguments)]
            pub fn new($($state: $state_ty),+) -> Self {
                Self {
                    current: $state_id::$initial,
                    $($state),+
                }
            }

            /// Dispatch `event` to the current state.
            pub fn handle(&mut self, event: impl ::core::convert::Into<$event_enum>) {
                match event.into() {
                    $($event_enum::$event(event) => $crate::dispatch(self, &event)),+
                }
            }

            /// The currently active state.
            pub fn current(&self) -> $state_id {
                self.current
            }

            /// The owned instance of state type `T`.
            pub fn state<T>(&self) -> &T
            where
                T: $crate::State,
                Self: $crate::Owns<T>,
            {
                $crate::Owns::state(self)
            }
        }

        impl $crate::Machine for $machine {
            type StateId = $state_id;
            type Event = $event_enum;

            const NAME: &'static str = stringify!($machine);
            const EVENTS: &'static [&'static str] = &[$(stringify!($event)),+];

            fn current(&self) -> $state_id {
                self.current
            }

            fn handle<E: ::core::convert::Into<$event_enum>>(&mut self, event: E) {
                <$machine>::handle(self, event)
            }

            fn transition_table() -> $crate::TransitionTable<$state_id> {
                $crate::TransitionTable::new(
                    stringify!($machine),
                    &[$((
                        stringify!($event),
                        <Self as $crate::Dispatch<$event_ty>>::resolve
                            as $crate::Resolver<$state_id>,
                    )),+],
                )
            }
        }

        impl<E> $crate::Dispatch<E> for $machine
        where
            $($state_ty: $crate::Handle<E>,)+
        {
            fn react(&mut self, event: &E) -> $crate::Action<$state_id> {
                match self.current {
                    $($state_id::$state => $crate::Handle::<E>::handle(&mut self.$state, event)),+
                }
            }

            fn leave(&mut self, event: &E) {
                match self.current {
                    $($state_id::$state => $crate::Handle::<E>::on_exit(&mut self.$state, event)),+
                }
            }

            fn enter(&mut self, target: $state_id, event: &E) -> $crate::Action<$state_id> {
                self.current = target;
                match target {
                    $($state_id::$state => $crate::Handle::<E>::on_enter(&mut self.$state, event)),+
                }
            }

            fn resolve(state: $state_id) -> $crate::Signature<$state_id> {
                match state {
                    $($state_id::$state => <$state_ty as $crate::Handle<E>>::ACTION),+
                }
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis machine $machine:ident {
            states $state_id:ident {
                $initial:ident($initial_ty:ty)
                $(, $state:ident($state_ty:ty))* $(,)?
            }
            events $event_enum:ident {
                $($event:ident($event_ty:ty)),+ $(,)?
            }
        }
    ) => {
        $crate::state_machine! {
            @define
            [$(#[$meta])*] $vis $machine
            initial $initial;
            states $state_id { $initial($initial_ty) $(, $state($state_ty))* }
            events $event_enum { $($event($event_ty)),+ }
        }
    };
}
