//! Property-based tests for dispatch.
//!
//! These tests use proptest to drive the door with random event sequences
//! and check it against a plain model of the door's transition table.

mod common;

use common::*;
use proptest::prelude::*;
use static_fsm::checkpoint::Checkpoint;
use static_fsm::{Machine, Signature, StateId};

prop_compose! {
    fn arbitrary_event()(variant in 0..4u8, key in 0..4u32) -> DoorEvent {
        match variant {
            0 => OpenEvent.into(),
            1 => CloseEvent.into(),
            2 => LockEvent { new_key: key }.into(),
            _ => UnlockEvent { key }.into(),
        }
    }
}

/// Expected (state, key) of the door after each event.
#[derive(Clone, Debug, PartialEq)]
struct Model {
    state: DoorState,
    key: u32,
    auto_lock: bool,
}

impl Model {
    fn step(&mut self, event: &DoorEvent) {
        match (self.state, event) {
            (DoorState::Closed, DoorEvent::Open(_)) => self.state = DoorState::Open,
            (DoorState::Closed, DoorEvent::Lock(lock)) => {
                self.state = DoorState::Locked;
                self.key = lock.new_key;
            }
            (DoorState::Open, DoorEvent::Close(_)) => {
                self.state = if self.auto_lock {
                    DoorState::Locked
                } else {
                    DoorState::Closed
                };
            }
            (DoorState::Locked, DoorEvent::Unlock(unlock)) if unlock.key == self.key => {
                self.state = DoorState::Closed;
            }
            _ => {}
        }
    }
}

fn build(auto_lock: bool, key: u32) -> Door {
    if auto_lock {
        auto_locking_door(key)
    } else {
        door(key)
    }
}

proptest! {
    #[test]
    fn door_follows_model(
        auto_lock in any::<bool>(),
        seed in 0..4u32,
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let mut door = build(auto_lock, seed);
        let mut model = Model { state: DoorState::Closed, key: seed, auto_lock };

        for event in events {
            model.step(&event);
            door.handle(event);
            prop_assert_eq!(door.current(), model.state);
            prop_assert_eq!(door.state::<LockedState>().key(), model.key);
        }
    }

    #[test]
    fn current_is_always_a_declared_state(
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let mut door = door(0);
        for event in events {
            door.handle(event);
            prop_assert!(DoorState::ALL.contains(&door.current()));
        }
    }

    #[test]
    fn dispatch_is_deterministic(
        auto_lock in any::<bool>(),
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let mut first = build(auto_lock, 0);
        let mut second = first.clone();

        for event in events {
            first.handle(event.clone());
            second.handle(event);
            prop_assert_eq!(&first, &second);
        }
    }

    #[test]
    fn nothing_leaves_machine_unchanged(
        auto_lock in any::<bool>(),
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let table = Door::transition_table();
        let mut door = build(auto_lock, 0);

        for event in events {
            let declared = table.lookup(door.current(), event.name());
            let before = door.clone();
            door.handle(event);
            if declared == Some(Signature::Nothing) {
                prop_assert_eq!(&door, &before);
            }
        }
    }

    #[test]
    fn checkpoint_roundtrip_anywhere(
        events in prop::collection::vec(arbitrary_event(), 0..20)
    ) {
        let mut door = door(0);
        for event in events {
            door.handle(event);
        }

        let bytes = Checkpoint::capture(&door).to_bytes().unwrap();
        let restored = Checkpoint::<Door>::from_bytes(&bytes).unwrap().restore().unwrap();
        prop_assert_eq!(restored, door);
    }
}
