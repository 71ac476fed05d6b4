//! Checkpoint and Resume
//!
//! This example demonstrates saving a machine mid-run and resuming it.
//!
//! Key concepts:
//! - Checkpoints carry every state's data, not only the current state
//! - Serialization formats (JSON for readability, binary for compactness)
//! - Validation on restore
//!
//! Run with: cargo run --example checkpoint_resume

use serde::{Deserialize, Serialize};
use static_fsm::checkpoint::{Checkpoint, CheckpointError};
use static_fsm::{by_default, on, state_machine, Action, Handle};

#[derive(Clone, Debug)]
pub struct Chunk {
    bytes: usize,
}

#[derive(Clone, Debug)]
pub struct Finish;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Receiving {
    received: usize,
    chunks: usize,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Done {
    total: usize,
}

state_machine! {
    /// Receives chunks of an upload until told to finish.
    pub machine Upload {
        states UploadState {
            Receiving(Receiving),
            Done(Done),
        }
        events UploadEvent {
            Chunk(Chunk),
            Finish(Finish),
        }
    }
}

impl Handle<Chunk> for Receiving {
    fn handle(&mut self, chunk: &Chunk) -> Action<UploadState> {
        self.received += chunk.bytes;
        self.chunks += 1;
        Action::Nothing
    }
}

on!(Receiving: Finish => Maybe(UploadState::Done) if |receiving, _| receiving.chunks > 0);

impl Handle<Finish> for Done {
    fn on_enter(&mut self, _: &Finish) -> Action<UploadState> {
        self.total += 1;
        Action::Nothing
    }
}

by_default!(Done: Chunk);

fn main() -> Result<(), CheckpointError> {
    env_logger::init();

    println!("=== Checkpoint and Resume ===\n");

    let mut upload = Upload::new(
        Receiving {
            received: 0,
            chunks: 0,
        },
        Done { total: 0 },
    );
    upload.handle(Chunk { bytes: 512 });
    upload.handle(Chunk { bytes: 256 });

    let checkpoint = Checkpoint::capture(&upload);
    let json = checkpoint.to_json()?;
    println!("Checkpoint (JSON):\n{}\n", json);

    let bytes = checkpoint.to_bytes()?;
    println!("Checkpoint (binary): {} bytes\n", bytes.len());

    // Simulate a restart
    drop(upload);

    let mut resumed = Checkpoint::<Upload>::from_bytes(&bytes)?.restore()?;
    println!(
        "Resumed in {} with {} bytes received",
        resumed.current(),
        resumed.state::<Receiving>().received
    );

    resumed.handle(Chunk { bytes: 128 });
    resumed.handle(Finish);
    println!(
        "Finished in {} after {} bytes ({} finish)",
        resumed.current(),
        resumed.state::<Receiving>().received,
        resumed.state::<Done>().total
    );

    println!("\nTampered checkpoint:");
    let mut tampered = Checkpoint::<Upload>::from_json(&json)?;
    tampered.version = 99;
    tampered.current_state = "Paused".to_string();
    match tampered.restore() {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  rejected: {}", e),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
