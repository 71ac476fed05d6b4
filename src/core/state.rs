//! State identifiers and the trait implemented by every state type.
//!
//! A machine declares a closed set of states. Each one is a distinct Rust type
//! that may carry instance data, and each one is named by a variant of the
//! machine's fieldless [`StateId`] enum. Both traits are implemented by
//! [`state_machine!`](crate::state_machine); user code rarely implements them
//! by hand.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// The closed set of state names of one machine.
///
/// Variants are listed in declaration order, so `ALL[0]` is always the
/// initial state of the machine.
///
/// # Example
///
/// ```rust
/// use static_fsm::StateId;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl std::fmt::Display for Light {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str(self.name())
///     }
/// }
///
/// impl StateId for Light {
///     const ALL: &'static [Self] = &[Self::Red, Self::Green];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Red => "Red",
///             Self::Green => "Green",
///         }
///     }
/// }
///
/// assert_eq!(Light::from_name("Green"), Some(Light::Green));
/// assert_eq!(Light::from_name("Blue"), None);
/// ```
pub trait StateId:
    Copy
    + Eq
    + Hash
    + Debug
    + Display
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Every state of the machine, in declaration order.
    const ALL: &'static [Self];

    /// Stable name of the state, as written in the machine definition.
    fn name(&self) -> &'static str;

    /// Look up a state by its name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|state| state.name() == name)
    }

    /// Position of the state in declaration order, which is also its row
    /// in a [`TransitionTable`](crate::TransitionTable).
    fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|state| state == self)
            .unwrap_or_default()
    }
}

/// Trait for the value types that make up a machine's states.
///
/// A state value is owned by its machine for the machine's whole lifetime;
/// switching states never recreates it, so any data it stores survives an
/// excursion to other states and back.
///
/// # Required Traits
///
/// - `Clone`: machines are cloneable, e.g. for checkpoints
/// - `PartialEq`: machines are comparable
/// - `Debug`: for diagnostics
/// - `Serialize` + `Deserialize`: machines are serializable for persistence
pub trait State: Clone + PartialEq + Debug + Serialize + DeserializeOwned {
    /// The state id enum of the machine this state belongs to.
    type Id: StateId;

    /// The id naming this state.
    const ID: Self::Id;

    /// Name of this state.
    fn name(&self) -> &'static str {
        Self::ID.name()
    }
}
