//! Checkpoint and restore for state machines.
//!
//! A checkpoint captures a whole machine: which state is current and the
//! instance data of every state, including the ones not currently active.
//! Restoring gives back a machine equal to the captured one.

use crate::core::StateId;
use crate::machine::Machine;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a machine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint<M> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Name of the machine definition
    pub machine_name: String,

    /// Name of the state that was current at capture
    pub current_state: String,

    /// The machine, with every state's data
    pub machine: M,
}

impl<M> Checkpoint<M>
where
    M: Machine + Clone + Serialize + DeserializeOwned,
{
    /// Capture the current state of `machine`.
    pub fn capture(machine: &M) -> Self {
        let checkpoint = Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            machine_name: M::NAME.to_string(),
            current_state: machine.current().name().to_string(),
            machine: machine.clone(),
        };
        log::info!(
            "captured checkpoint {} of {} in state {}",
            checkpoint.id,
            checkpoint.machine_name,
            checkpoint.current_state
        );
        checkpoint
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Check the checkpoint against the machine definition, accumulating
    /// every violation.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<CheckpointError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<CheckpointError>>> = Vec::new();

        checks.push(if self.version == CHECKPOINT_VERSION {
            Validation::success(())
        } else {
            Validation::fail(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            })
        });

        checks.push(if self.machine_name == M::NAME {
            Validation::success(())
        } else {
            Validation::fail(CheckpointError::MachineMismatch {
                expected: M::NAME.to_string(),
                found: self.machine_name.clone(),
            })
        });

        let actual = self.machine.current();
        checks.push(match M::StateId::from_name(&self.current_state) {
            None => Validation::fail(CheckpointError::UnknownState(self.current_state.clone())),
            Some(recorded) if recorded != actual => {
                Validation::fail(CheckpointError::StateMismatch {
                    recorded: self.current_state.clone(),
                    actual: actual.name().to_string(),
                })
            }
            Some(_) => Validation::success(()),
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and give back the captured machine.
    pub fn restore(self) -> Result<M, CheckpointError> {
        match self.validate() {
            Validation::Success(_) => {
                log::info!("restored checkpoint {} of {}", self.id, self.machine_name);
                Ok(self.machine)
            }
            Validation::Failure(errors) => {
                let reasons = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                log::warn!("rejected checkpoint {}: {}", self.id, reasons);
                Err(CheckpointError::ValidationFailed(reasons))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{state_machine, Action, Handle, Signature};

    #[derive(Clone, Debug)]
    struct Coin;

    #[derive(Clone, Debug)]
    struct Push;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Barred {
        pushes: u32,
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Free {
        coins: u32,
    }

    state_machine! {
        machine Turnstile {
            states TurnstileState {
                Locked(Barred),
                Unlocked(Free),
            }
            events TurnstileEvent {
                Coin(Coin),
                Push(Push),
            }
        }
    }

    impl Handle<Coin> for Barred {
        const ACTION: Signature<TurnstileState> = Signature::TransitionTo(TurnstileState::Unlocked);

        fn handle(&mut self, _: &Coin) -> Action<TurnstileState> {
            Action::TransitionTo(TurnstileState::Unlocked)
        }
    }

    impl Handle<Push> for Barred {
        fn handle(&mut self, _: &Push) -> Action<TurnstileState> {
            self.pushes += 1;
            Action::Nothing
        }
    }

    impl Handle<Coin> for Free {
        fn on_enter(&mut self, _: &Coin) -> Action<TurnstileState> {
            self.coins += 1;
            Action::Nothing
        }
    }

    impl Handle<Push> for Free {
        const ACTION: Signature<TurnstileState> = Signature::TransitionTo(TurnstileState::Locked);

        fn handle(&mut self, _: &Push) -> Action<TurnstileState> {
            Action::TransitionTo(TurnstileState::Locked)
        }
    }

    fn used_turnstile() -> Turnstile {
        let mut turnstile = Turnstile::new(Barred { pushes: 0 }, Free { coins: 0 });
        turnstile.handle(Push);
        turnstile.handle(Coin);
        turnstile
    }

    #[test]
    fn capture_records_machine_and_state() {
        let checkpoint = Checkpoint::capture(&used_turnstile());
        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.machine_name, "Turnstile");
        assert_eq!(checkpoint.current_state, "Unlocked");
        assert!(!checkpoint.id.is_empty());
    }

    #[test]
    fn json_roundtrip_restores_equal_machine() {
        let turnstile = used_turnstile();
        let json = Checkpoint::capture(&turnstile).to_json().unwrap();
        let restored = Checkpoint::<Turnstile>::from_json(&json)
            .unwrap()
            .restore()
            .unwrap();
        assert_eq!(restored, turnstile);
        assert_eq!(restored.state::<Barred>().pushes, 1);
    }

    #[test]
    fn binary_roundtrip_restores_equal_machine() {
        let turnstile = used_turnstile();
        let bytes = Checkpoint::capture(&turnstile).to_bytes().unwrap();
        let restored = Checkpoint::<Turnstile>::from_bytes(&bytes)
            .unwrap()
            .restore()
            .unwrap();
        assert_eq!(restored, turnstile);
    }

    #[test]
    fn restored_machine_keeps_handling_events() {
        let json = Checkpoint::capture(&used_turnstile()).to_json().unwrap();
        let mut restored = Checkpoint::<Turnstile>::from_json(&json)
            .unwrap()
            .restore()
            .unwrap();
        restored.handle(Push);
        restored.handle(Coin);
        assert_eq!(restored.current(), TurnstileState::Unlocked);
        assert_eq!(restored.state::<Free>().coins, 2);
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let mut checkpoint = Checkpoint::capture(&used_turnstile());
        checkpoint.version = 7;
        checkpoint.machine_name = "Door".to_string();
        checkpoint.current_state = "Ajar".to_string();

        match checkpoint.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, CheckpointError::UnsupportedVersion { found: 7, .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, CheckpointError::MachineMismatch { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, CheckpointError::UnknownState(_))));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn restore_rejects_state_mismatch() {
        let mut checkpoint = Checkpoint::capture(&used_turnstile());
        checkpoint.current_state = "Locked".to_string();

        let result = checkpoint.restore();
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let result = Checkpoint::<Turnstile>::from_json("{ not json");
        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }
}
