//! Commands and the move log.
//!
//! A `Command` is one request from the caller to the engine. Callers that
//! drive the engine from several sources (input, AI worker, timers) push
//! commands through a single queue and hand them to
//! `GameEngine::execute` one at a time.

use serde::{Deserialize, Serialize};

use super::player::Mark;
use crate::powerups::PowerUpKind;

/// A request to the game engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Place `player`'s mark on `cell`.
    Place { player: Mark, cell: usize },
    /// Invoke a power-up for `player`.
    PowerUp { player: Mark, kind: PowerUpKind },
    /// Take back the last placement.
    Undo,
    /// Start over, optionally at a new board size.
    Reset { size: Option<usize> },
    /// Lift any freeze (real-time expiry).
    ClearFreeze,
    /// The current player's time ran out.
    ForceAdvanceTurn,
}

/// One accepted placement.
///
/// The log exists only to support undo. Bomb removals are not recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who placed the mark.
    pub player: Mark,

    /// The cell written.
    pub cell: usize,

    /// Position in the game's placement order, starting at 0.
    pub sequence: u32,

    /// This move used up a pending extra turn.
    pub consumed_extra_turn: bool,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Mark, cell: usize, sequence: u32) -> Self {
        Self {
            player,
            cell,
            sequence,
            consumed_extra_turn: false,
        }
    }

    /// Mark this record as having consumed an extra turn.
    #[must_use]
    pub fn with_extra_turn(mut self, consumed: bool) -> Self {
        self.consumed_extra_turn = consumed;
        self
    }
}

/// A move chosen off-line (e.g. by an AI worker) against a snapshot.
///
/// The engine only commits it if its state has not changed since
/// `generation`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Proposal {
    pub player: Mark,
    pub cell: usize,
    pub generation: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_record() {
        let record = MoveRecord::new(Mark::Second, 4, 3);

        assert_eq!(record.player, Mark::Second);
        assert_eq!(record.cell, 4);
        assert_eq!(record.sequence, 3);
        assert!(!record.consumed_extra_turn);
        assert!(record.with_extra_turn(true).consumed_extra_turn);
    }

    #[test]
    fn test_command_serialization() {
        let commands = [
            Command::Place { player: Mark::First, cell: 2 },
            Command::PowerUp { player: Mark::Second, kind: PowerUpKind::Bomb },
            Command::Undo,
            Command::Reset { size: Some(4) },
            Command::ClearFreeze,
            Command::ForceAdvanceTurn,
        ];

        for command in commands {
            let json = serde_json::to_string(&command).unwrap();
            let deserialized: Command = serde_json::from_str(&json).unwrap();
            assert_eq!(command, deserialized);
        }
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(Mark::First, 7, 1).with_extra_turn(true);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
