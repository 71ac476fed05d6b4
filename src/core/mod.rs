//! Core state machine types.
//!
//! This module contains the vocabulary the dispatch engine is built from:
//! - State ids and the `State` trait
//! - Runtime actions and their static signatures
//! - The per (state, event) `Handle` trait with its default hooks

mod action;
mod handle;
mod state;

pub use action::{Action, Signature};
pub use handle::Handle;
pub use state::{State, StateId};
