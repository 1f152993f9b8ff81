//! Power-up inventory and active effects for one game.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::inventory::{PowerUpInventory, PowerUpKind};
use crate::board::Board;
use crate::core::{Mark, MarkMap, RandomSource};
use crate::error::PowerUpError;

/// Effects currently in force.
///
/// The two slots are independent: a frozen player and a pending extra turn
/// for the other player can coexist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveEffects {
    /// Player barred from their next move attempt.
    pub frozen: Option<Mark>,
    /// Player whose next successful move keeps the turn.
    pub extra_turn: Option<Mark>,
}

/// What a power-up did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpOutcome {
    /// `target` is frozen for their next attempt.
    Froze { target: Mark },
    /// `player` keeps the turn after their next move.
    ExtraTurn { player: Mark },
    /// The cleared cell, or `None` if the opponent had no marks.
    Bombed { cell: Option<usize> },
}

/// Per-game power-up bookkeeping.
///
/// Turn ownership is checked by the game engine; this type only knows
/// counts and effects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUpState {
    inventories: MarkMap<PowerUpInventory>,
    effects: ActiveEffects,
}

impl PowerUpState {
    /// Start a game with `starting` power-ups for each player.
    #[must_use]
    pub fn new(starting: PowerUpInventory) -> Self {
        Self {
            inventories: MarkMap::with_value(starting),
            effects: ActiveEffects::default(),
        }
    }

    #[must_use]
    pub fn inventory(&self, mark: Mark) -> &PowerUpInventory {
        &self.inventories[mark]
    }

    #[must_use]
    pub fn inventories(&self) -> &MarkMap<PowerUpInventory> {
        &self.inventories
    }

    #[must_use]
    pub fn effects(&self) -> ActiveEffects {
        self.effects
    }

    fn spend(&mut self, by: Mark, kind: PowerUpKind) -> Result<(), PowerUpError> {
        if self.inventories[by].spend(kind) {
            Ok(())
        } else {
            Err(PowerUpError::InsufficientPowerUps { player: by, kind })
        }
    }

    /// Freeze `by`'s opponent for one move attempt.
    pub fn use_freeze(&mut self, by: Mark) -> Result<PowerUpOutcome, PowerUpError> {
        self.spend(by, PowerUpKind::Freeze)?;
        let target = by.opponent();
        self.effects.frozen = Some(target);
        debug!(player = %by, target = %target, "freeze applied");
        Ok(PowerUpOutcome::Froze { target })
    }

    /// Grant `by` an extra turn after their next successful move.
    pub fn use_double_move(&mut self, by: Mark) -> Result<PowerUpOutcome, PowerUpError> {
        self.spend(by, PowerUpKind::DoubleMove)?;
        self.effects.extra_turn = Some(by);
        debug!(player = %by, "extra turn pending");
        Ok(PowerUpOutcome::ExtraTurn { player: by })
    }

    /// Clear one uniformly chosen cell held by `by`'s opponent.
    ///
    /// The count is spent even when the opponent has nothing to remove.
    pub fn use_bomb<R: RandomSource + ?Sized>(
        &mut self,
        by: Mark,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<PowerUpOutcome, PowerUpError> {
        self.spend(by, PowerUpKind::Bomb)?;

        let targets: Vec<usize> = board.cells_of(by.opponent()).collect();
        let pick = rng
            .choose_index(targets.len())
            .and_then(|i| targets.get(i).copied());

        // An index outside the candidates counts as no target.
        let mut cell = None;
        if let Some(target) = pick {
            if board.take(target).is_some() {
                cell = Some(target);
            }
        }
        debug!(player = %by, ?cell, candidates = targets.len(), "bomb detonated");
        Ok(PowerUpOutcome::Bombed { cell })
    }

    /// Invoke `kind` for `by`. The board and RNG are only touched by bombs.
    pub fn use_power_up<R: RandomSource + ?Sized>(
        &mut self,
        by: Mark,
        kind: PowerUpKind,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<PowerUpOutcome, PowerUpError> {
        match kind {
            PowerUpKind::Freeze => self.use_freeze(by),
            PowerUpKind::DoubleMove => self.use_double_move(by),
            PowerUpKind::Bomb => self.use_bomb(by, board, rng),
        }
    }

    // === Effects ===

    #[must_use]
    pub fn is_frozen(&self, mark: Mark) -> bool {
        self.effects.frozen == Some(mark)
    }

    /// Consume the freeze on `mark`. Returns true if one was in force.
    pub fn take_freeze(&mut self, mark: Mark) -> bool {
        if self.is_frozen(mark) {
            self.effects.frozen = None;
            true
        } else {
            false
        }
    }

    /// Lift any freeze, e.g. when an external timer expires.
    pub fn clear_freeze(&mut self) -> Option<Mark> {
        self.effects.frozen.take()
    }

    #[must_use]
    pub fn has_extra_turn(&self, mark: Mark) -> bool {
        self.effects.extra_turn == Some(mark)
    }

    /// Consume `mark`'s pending extra turn. Returns true if one was pending.
    pub fn take_extra_turn(&mut self, mark: Mark) -> bool {
        if self.has_extra_turn(mark) {
            self.effects.extra_turn = None;
            true
        } else {
            false
        }
    }

    /// Re-arm an extra turn that an undone move had consumed.
    pub fn restore_extra_turn(&mut self, mark: Mark) {
        self.effects.extra_turn = Some(mark);
    }
}
