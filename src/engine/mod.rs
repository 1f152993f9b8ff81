//! Game orchestration.
//!
//! `GameEngine` owns the board, rules, power-up state and move log of one
//! game and is the only thing that mutates them. Callers issue commands and
//! read `Snapshot`s; an AI move computed elsewhere comes back in as a
//! `Proposal` and is validated like any other move.

mod game;

pub use game::GameEngine;
