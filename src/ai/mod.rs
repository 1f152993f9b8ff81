//! Minimax opponent for rust-toe.
//!
//! ## Overview
//!
//! - **Minimax with alpha-beta**: exhaustive on 3×3, capped at a
//!   configurable ply depth on larger boards
//! - **Difficulty policy**: easy agents mostly play randomly
//! - **Pure search**: reads a board or snapshot, never engine state
//! - **Worker support**: searches can run off-thread; results come back as
//!   generation-stamped proposals
//!
//! ## Usage
//!
//! ```rust
//! use rust_toe::ai::{AgentConfig, AiAgent, Difficulty};
//! use rust_toe::core::Mark;
//! use rust_toe::engine::GameEngine;
//!
//! let mut game = GameEngine::new_game(3).unwrap();
//! let mut agent = AiAgent::new(AgentConfig::default()).unwrap();
//!
//! game.apply_move(Mark::First, 4).unwrap();
//!
//! let proposal = agent.propose(&game.snapshot(), Difficulty::Hard).unwrap();
//! game.commit_proposal(proposal).unwrap();
//!
//! assert_eq!(game.board().count(Mark::Second), 1);
//! ```

pub mod agent;
pub mod config;
pub mod difficulty;
pub mod minimax;
pub mod stats;
pub mod worker;

// Re-export main types
pub use agent::AiAgent;
pub use config::AgentConfig;
pub use difficulty::Difficulty;
pub use minimax::{minimax, Search};
pub use stats::SearchStats;
pub use worker::spawn_proposal;
