//! The lockable door used across integration tests.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use static_fsm::{by_default, on, state_machine, Action, Handle};

#[derive(Clone, Debug, PartialEq)]
pub struct OpenEvent;

#[derive(Clone, Debug, PartialEq)]
pub struct CloseEvent;

#[derive(Clone, Debug, PartialEq)]
pub struct LockEvent {
    pub new_key: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnlockEvent {
    pub key: u32,
}

#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
pub struct ClosedState {
    pub auto_lock: bool,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct OpenState;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LockedState {
    key: u32,
}

impl LockedState {
    pub fn new(key: u32) -> Self {
        Self { key }
    }

    pub fn key(&self) -> u32 {
        self.key
    }
}

state_machine! {
    pub machine Door {
        states DoorState {
            Closed(ClosedState),
            Open(OpenState),
            Locked(LockedState),
        }
        events DoorEvent {
            Open(OpenEvent),
            Close(CloseEvent),
            Lock(LockEvent),
            Unlock(UnlockEvent),
        }
    }
}

on!(ClosedState: OpenEvent => TransitionTo(DoorState::Open));

on!(ClosedState: LockEvent => TransitionTo(DoorState::Locked));

impl Handle<CloseEvent> for ClosedState {
    fn on_enter(&mut self, _: &CloseEvent) -> Action<DoorState> {
        Action::maybe(self.auto_lock, DoorState::Locked)
    }
}

by_default!(ClosedState: UnlockEvent);

on!(OpenState: CloseEvent => TransitionTo(DoorState::Closed));

by_default!(OpenState: OpenEvent, LockEvent, UnlockEvent);

on!(LockedState: UnlockEvent => Maybe(DoorState::Closed) if |locked, unlock| unlock.key == locked.key);

impl Handle<LockEvent> for LockedState {
    fn on_enter(&mut self, event: &LockEvent) -> Action<DoorState> {
        self.key = event.new_key;
        Action::Nothing
    }
}

by_default!(LockedState: OpenEvent, CloseEvent);

/// A door that starts closed, with the lock seeded with `key`.
pub fn door(key: u32) -> Door {
    Door::new(ClosedState::default(), OpenState, LockedState::new(key))
}

/// A door that locks itself whenever it is closed.
pub fn auto_locking_door(key: u32) -> Door {
    Door::new(
        ClosedState { auto_lock: true },
        OpenState,
        LockedState::new(key),
    )
}
