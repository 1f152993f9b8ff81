//! Move modifiers: freeze, double move and bomb.
//!
//! Each player starts a game with a fixed inventory (one of each by default)
//! that is never replenished. Effects gate turns, not wall-clock time; any
//! real-time expiry is driven from outside through the game engine.

pub mod inventory;
pub mod state;

pub use inventory::{PowerUpInventory, PowerUpKind};
pub use state::{ActiveEffects, PowerUpOutcome, PowerUpState};
