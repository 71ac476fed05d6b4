//! static-fsm: finite state machines with a fixed set of states and events
//!
//! A machine owns exactly one value of each of its state types and a tag
//! naming the current one. Each state decides, per event type, what to do
//! about an event by returning an [`Action`]; the machine applies it,
//! running exit and entry hooks when the current state changes.
//!
//! # Core Concepts
//!
//! - **State**: a value type with its own data, owned by the machine for its
//!   whole lifetime, named by a [`StateId`]
//! - **Event**: a plain data type; each machine declares the closed set it
//!   accepts
//! - **Handle**: the per (state, event) reaction, with defaults that make an
//!   unlisted event a no-op
//! - **Action**: `Nothing`, `TransitionTo(state)` or `Maybe(...)`
//!
//! Missing handlers, undeclared events and wrongly built machines are all
//! compile errors; dispatch itself cannot fail.
//!
//! # Example
//!
//! ```rust
//! use static_fsm::{by_default, on, state_machine, Action, Handle};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug)]
//! pub struct Coin;
//!
//! #[derive(Clone, Debug)]
//! pub struct Push;
//!
//! #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! pub struct Barred;
//!
//! #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! pub struct Free {
//!     coins: u32,
//! }
//!
//! state_machine! {
//!     pub machine Turnstile {
//!         states TurnstileState {
//!             Locked(Barred),
//!             Unlocked(Free),
//!         }
//!         events TurnstileEvent {
//!             Coin(Coin),
//!             Push(Push),
//!         }
//!     }
//! }
//!
//! on!(Barred: Coin => TransitionTo(TurnstileState::Unlocked));
//!
//! impl Handle<Coin> for Free {
//!     fn on_enter(&mut self, _: &Coin) -> Action<TurnstileState> {
//!         self.coins += 1;
//!         Action::Nothing
//!     }
//! }
//!
//! on!(Free: Push => TransitionTo(TurnstileState::Locked));
//!
//! by_default!(Barred: Push);
//!
//! let mut turnstile = Turnstile::new(Barred, Free { coins: 0 });
//! turnstile.handle(Push);
//! assert_eq!(turnstile.current(), TurnstileState::Locked);
//!
//! turnstile.handle(Coin);
//! turnstile.handle(Coin);
//! assert_eq!(turnstile.current(), TurnstileState::Unlocked);
//! assert_eq!(turnstile.state::<Free>().coins, 1);
//! ```

pub mod checkpoint;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Action, Handle, Signature, State, StateId};
pub use crate::machine::{dispatch, Dispatch, Machine, Owns, Resolver, TableRow, TransitionTable};
