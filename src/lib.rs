//! # rust-toe
//!
//! An N×N tic-tac-toe engine with power-ups and a minimax opponent.
//!
//! ## Design Principles
//!
//! 1. **Size-Agnostic**: Lines, status and search work for any N ≥ 1.
//!    Nothing assumes a 3×3 board.
//!
//! 2. **One Owned Aggregate**: All game state lives in a `GameEngine`
//!    passed explicitly; there is no global state.
//!
//! 3. **Atomic Transitions**: A command either applies completely or is
//!    rejected with the engine unchanged.
//!
//! ## Architecture
//!
//! - **Recomputed Status**: The board is re-evaluated from scratch after
//!   every mutation, including bomb removals.
//!
//! - **Injectable Randomness**: The easy AI's coin flip and bomb targeting
//!   draw from a `RandomSource`, seeded `GameRng` by default.
//!
//! - **Stale-Safe AI**: Searches read snapshots; their proposals are
//!   committed only if the engine's generation has not moved.
//!
//! ## Modules
//!
//! - `core`: Marks, commands, snapshots, RNG, configuration
//! - `board`: The N×N grid
//! - `rules`: Winning lines and status evaluation
//! - `powerups`: Freeze, double move and bomb
//! - `engine`: Turn orchestration and undo
//! - `ai`: Minimax opponent

pub mod core;
pub mod board;
pub mod rules;
pub mod powerups;
pub mod engine;
pub mod ai;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Command, MoveRecord, Proposal,
    GameConfig,
    Mark, MarkMap,
    GameRng, GameRngState, RandomSource,
    Snapshot,
};

pub use crate::board::Board;

pub use crate::rules::{lines_for, LineCache, LineRules, RulesEngine, Status, WinLine};

pub use crate::powerups::{ActiveEffects, PowerUpInventory, PowerUpKind, PowerUpOutcome, PowerUpState};

pub use crate::engine::GameEngine;

pub use crate::ai::{AgentConfig, AiAgent, Difficulty, SearchStats};

pub use crate::error::{
    AiError, BoardError, CommandError, CommandResult, ConfigError,
    MoveError, PowerUpError, UndoError,
};
