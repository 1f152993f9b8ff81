//! Read-only views of a game.
//!
//! ## Snapshot
//!
//! Everything an outside collaborator (renderer, AI worker, timer) may read:
//! - Board, status, player to move
//! - Active effects and remaining power-ups
//! - Move log
//! - Generation counter for staleness checks
//!
//! Snapshots are detached copies. The move log is an `im` vector, so taking
//! one is cheap even late in a game.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::player::{Mark, MarkMap};
use crate::board::Board;
use crate::powerups::PowerUpInventory;
use crate::rules::Status;

/// Detached copy of the observable engine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub status: Status,
    pub current_player: Mark,

    /// Player barred from their next move attempt.
    pub frozen: Option<Mark>,

    /// Player whose next move keeps the turn.
    pub extra_turn_pending: Option<Mark>,

    pub inventories: MarkMap<PowerUpInventory>,

    /// Accepted placements, oldest first.
    pub history: Vector<MoveRecord>,

    /// Bumped by every state change; identifies this snapshot's state.
    pub generation: u64,
}

impl Snapshot {
    /// Number of placements still on the log.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Most recent placement, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// True if a move by `player` could be accepted right now.
    #[must_use]
    pub fn can_move(&self, player: Mark) -> bool {
        !self.status.is_terminal() && self.current_player == player && self.frozen != Some(player)
    }
}
