//! Core engine types: players, commands, snapshots, RNG, configuration.
//!
//! These are the building blocks shared by the engine and the AI.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Command, MoveRecord, Proposal};
pub use config::GameConfig;
pub use player::{Mark, MarkMap};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use state::Snapshot;
