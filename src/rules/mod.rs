//! Win and draw detection for N×N boards.
//!
//! The engine never scans lines itself; it asks a `RulesEngine` to
//! re-evaluate the whole board after every mutation. Status is recomputed,
//! never patched, so a bomb removal can turn a draw back into a live game.

pub mod engine;
pub mod lines;

pub use engine::{LineRules, RulesEngine, Status};
pub use lines::{lines_for, LineCache, WinLine};
