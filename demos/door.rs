//! Lockable Door
//!
//! This example walks a door through its whole transition table.
//!
//! Key concepts:
//! - One value per state, kept across transitions (the lock remembers its key)
//! - Conditional transitions decided from event data (unlocking)
//! - Entry hooks that store event data (locking) or chain a further
//!   transition (auto-lock on close)
//! - Static introspection of the declared transitions
//!
//! Run with: RUST_LOG=debug cargo run --example door

use serde::{Deserialize, Serialize};
use static_fsm::{by_default, on, state_machine, Action, Handle, Machine};

#[derive(Clone, Debug)]
pub struct OpenEvent;

#[derive(Clone, Debug)]
pub struct CloseEvent;

#[derive(Clone, Debug)]
pub struct LockEvent {
    new_key: u32,
}

#[derive(Clone, Debug)]
pub struct UnlockEvent {
    key: u32,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ClosedState {
    auto_lock: bool,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct OpenState;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LockedState {
    key: u32,
}

state_machine! {
    /// A door that can be opened, closed, locked with a key and unlocked
    /// with the same key.
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

on!(OpenState: CloseEvent => TransitionTo(DoorState::Closed));

on!(LockedState: UnlockEvent => Maybe(DoorState::Closed) if |locked, unlock| unlock.key == locked.key);

impl Handle<LockEvent> for LockedState {
    fn on_enter(&mut self, event: &LockEvent) -> Action<DoorState> {
        self.key = event.new_key;
        Action::Nothing
    }
}

by_default!(ClosedState: UnlockEvent);
by_default!(OpenState: OpenEvent, LockEvent, UnlockEvent);
by_default!(LockedState: OpenEvent, CloseEvent);

fn run(door: &mut Door, events: Vec<DoorEvent>) {
    for event in events {
        let label = format!("{:?}", event);
        door.handle(event);
        println!(
            "  {:<40} -> {} (key {})",
            label,
            door.current(),
            door.state::<LockedState>().key
        );
    }
}

fn main() {
    env_logger::init();

    println!("=== Lockable Door ===\n");

    let mut door = Door::new(
        ClosedState { auto_lock: false },
        OpenState,
        LockedState { key: 0 },
    );
    println!("Initial state: {}\n", door.current());

    run(
        &mut door,
        vec![
            LockEvent { new_key: 1234 }.into(),
            UnlockEvent { key: 2 }.into(),
            UnlockEvent { key: 1234 }.into(),
            OpenEvent.into(),
            OpenEvent.into(),
            LockEvent { new_key: 123 }.into(),
            CloseEvent.into(),
            CloseEvent.into(),
            UnlockEvent { key: 1234 }.into(),
            LockEvent { new_key: 123 }.into(),
            LockEvent { new_key: 123 }.into(),
            UnlockEvent { key: 123 }.into(),
        ],
    );

    println!("\n=== Auto-locking Door ===\n");

    let mut auto = Door::new(
        ClosedState { auto_lock: true },
        OpenState,
        LockedState { key: 0 },
    );
    run(
        &mut auto,
        vec![OpenEvent.into(), CloseEvent.into(), UnlockEvent { key: 0 }.into()],
    );

    println!("\n=== Declared Transitions ===\n");

    let table = Door::transition_table();
    for (state, event, action) in table.transitions() {
        println!("  {:<8} on {:<8} => {}", state, event, action);
    }

    println!("\n=== Example Complete ===");
}
