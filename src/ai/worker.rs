//! Off-thread move selection.
//!
//! Searching a 5×5 board can take long enough to stall a UI loop, so the
//! search may run on its own thread against a snapshot. Only the engine
//! commits the result, through `GameEngine::commit_proposal`, which drops
//! it if the game changed while the worker was busy.

use std::thread::{self, JoinHandle};

use super::agent::AiAgent;
use super::difficulty::Difficulty;
use crate::core::{Proposal, RandomSource, Snapshot};
use crate::error::AiError;

/// Run `agent.propose` on a new thread.
///
/// The agent is handed back with the result so its statistics and RNG
/// stream can be reused.
pub fn spawn_proposal<R>(
    mut agent: AiAgent<R>,
    snapshot: Snapshot,
    difficulty: Difficulty,
) -> JoinHandle<(AiAgent<R>, Result<Proposal, AiError>)>
where
    R: RandomSource + Send + 'static,
{
    thread::spawn(move || {
        let result = agent.propose(&snapshot, difficulty);
        (agent, result)
    })
}
