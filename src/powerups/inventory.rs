//! Power-up kinds and per-player counts.

use serde::{Deserialize, Serialize};

/// The three move modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    /// Bar the opponent from their next move attempt.
    Freeze,
    /// Keep the turn after your next move.
    DoubleMove,
    /// Remove one random opponent mark.
    Bomb,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Freeze, PowerUpKind::DoubleMove, PowerUpKind::Bomb];
}

impl std::fmt::Display for PowerUpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PowerUpKind::Freeze => "freeze",
            PowerUpKind::DoubleMove => "double-move",
            PowerUpKind::Bomb => "bomb",
        };
        write!(f, "{name}")
    }
}

/// Remaining uses of each power-up for one player.
///
/// Counts only ever go down during a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpInventory {
    pub freeze: u32,
    pub double_move: u32,
    pub bomb: u32,
}

impl Default for PowerUpInventory {
    /// One of each.
    fn default() -> Self {
        Self::uniform(1)
    }
}

impl PowerUpInventory {
    /// The same count for every kind.
    #[must_use]
    pub const fn uniform(count: u32) -> Self {
        Self {
            freeze: count,
            double_move: count,
            bomb: count,
        }
    }

    /// No power-ups at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self::uniform(0)
    }

    /// Remaining count of `kind`.
    #[must_use]
    pub fn count(&self, kind: PowerUpKind) -> u32 {
        match kind {
            PowerUpKind::Freeze => self.freeze,
            PowerUpKind::DoubleMove => self.double_move,
            PowerUpKind::Bomb => self.bomb,
        }
    }

    #[must_use]
    pub fn has(&self, kind: PowerUpKind) -> bool {
        self.count(kind) > 0
    }

    /// Spend one use of `kind`. Returns false, unchanged, when none are left.
    pub fn spend(&mut self, kind: PowerUpKind) -> bool {
        let slot = match kind {
            PowerUpKind::Freeze => &mut self.freeze,
            PowerUpKind::DoubleMove => &mut self.double_move,
            PowerUpKind::Bomb => &mut self.bomb,
        };
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}
