//! Turn orchestration.

use im::Vector;
use tracing::{debug, info};

use crate::board::Board;
use crate::core::{
    Command, GameConfig, GameRng, GameRngState, Mark, MoveRecord, Proposal, RandomSource, Snapshot,
};
use crate::error::{BoardError, CommandResult, MoveError, PowerUpError, UndoError};
use crate::powerups::{PowerUpKind, PowerUpOutcome, PowerUpState};
use crate::rules::{LineRules, RulesEngine, Status};

/// One game: board, turn, power-ups, move log and status.
///
/// All state is owned here and every operation is a complete transition.
/// A rejected command leaves the engine exactly as it was, with one
/// exception: a move attempt rejected as `Frozen` uses up the freeze.
///
/// ## Example
///
/// ```
/// use rust_toe::core::Mark;
/// use rust_toe::engine::GameEngine;
/// use rust_toe::rules::Status;
///
/// let mut game = GameEngine::new_game(3).unwrap();
/// for (player, cell) in [(Mark::First, 0), (Mark::Second, 4), (Mark::First, 1), (Mark::Second, 7)] {
///     game.apply_move(player, cell).unwrap();
/// }
/// let status = game.apply_move(Mark::First, 2).unwrap();
///
/// assert_eq!(status.winner(), Some(Mark::First));
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<R = GameRng> {
    config: GameConfig,
    rules: LineRules,
    board: Board,
    power_ups: PowerUpState,
    history: Vector<MoveRecord>,
    current: Mark,
    status: Status,
    next_sequence: u32,
    generation: u64,
    rng: R,
}

impl GameEngine<GameRng> {
    /// Default game on an N×N board.
    pub fn new_game(size: usize) -> Result<Self, BoardError> {
        Self::new(GameConfig::with_size(size))
    }

    /// Start a game, seeding the RNG from the config.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Start a game whose random stream resumes from `state`.
    ///
    /// Paired with [`rng_state`](Self::rng_state), this replays the bomb
    /// targets of a recorded game.
    pub fn with_rng_state(config: GameConfig, state: &GameRngState) -> Result<Self, BoardError> {
        Self::with_rng(config, GameRng::from_state(state))
    }

    /// Position of the engine's random stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Start a game with a caller-supplied random source.
    ///
    /// Building the board applies the same size check as
    /// [`GameConfig::validate`], so an invalid config is rejected here.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, BoardError> {
        let board = Board::new(config.board_size)?;
        let rules = LineRules::new(config.board_size);
        let status = rules.evaluate(&board);

        info!(size = config.board_size, first = %config.first_player, "new game");

        Ok(Self {
            power_ups: PowerUpState::new(config.power_ups),
            current: config.first_player,
            config,
            rules,
            board,
            history: Vector::new(),
            status,
            next_sequence: 0,
            generation: 0,
            rng,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn rules(&self) -> &LineRules {
        &self.rules
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn current_player(&self) -> Mark {
        self.current
    }

    #[must_use]
    pub fn power_ups(&self) -> &PowerUpState {
        &self.power_ups
    }

    /// Accepted placements, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Counter bumped by every state change.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Detached copy of everything observable.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let effects = self.power_ups.effects();
        Snapshot {
            board: self.board.clone(),
            status: self.status.clone(),
            current_player: self.current,
            frozen: effects.frozen,
            extra_turn_pending: effects.extra_turn,
            inventories: *self.power_ups.inventories(),
            history: self.history.clone(),
            generation: self.generation,
        }
    }

    // === Transitions ===

    /// Re-evaluate from scratch after a mutation.
    fn commit(&mut self) -> Status {
        self.generation += 1;
        let previous = std::mem::replace(&mut self.status, self.rules.evaluate(&self.board));
        if self.status != previous && self.status.is_terminal() {
            info!(status = %self.status, moves = self.history.len(), "game over");
        }
        self.status.clone()
    }

    /// Place `player`'s mark on `index`.
    ///
    /// Checks run in order: turn, freeze, game over, then the board's own
    /// range and occupancy checks.
    pub fn apply_move(&mut self, player: Mark, index: usize) -> Result<Status, MoveError> {
        if player != self.current {
            debug!(%player, current = %self.current, index, "move rejected: not your turn");
            return Err(MoveError::NotYourTurn {
                player,
                current: self.current,
            });
        }

        if self.power_ups.take_freeze(player) {
            self.generation += 1;
            debug!(%player, index, "move rejected: frozen, freeze consumed");
            return Err(MoveError::Frozen { player });
        }

        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.place(index, player).inspect_err(|err| {
            debug!(%player, index, %err, "move rejected by board");
        })?;

        let extra_turn = self.power_ups.take_extra_turn(player);
        let record = MoveRecord::new(player, index, self.next_sequence).with_extra_turn(extra_turn);
        self.next_sequence += 1;
        self.history.push_back(record);

        if !extra_turn {
            self.current = player.opponent();
        }

        let status = self.commit();
        debug!(%player, index, extra_turn, %status, "move applied");
        Ok(status)
    }

    /// Invoke a power-up for the player to move.
    pub fn use_power_up(&mut self, player: Mark, kind: PowerUpKind) -> Result<PowerUpOutcome, PowerUpError> {
        if player != self.current {
            return Err(PowerUpError::NotYourTurn {
                player,
                current: self.current,
            });
        }
        if self.power_ups.is_frozen(player) {
            return Err(PowerUpError::Frozen { player });
        }
        if self.status.is_terminal() {
            return Err(PowerUpError::GameOver);
        }

        let outcome = self
            .power_ups
            .use_power_up(player, kind, &mut self.board, &mut self.rng)
            .inspect_err(|err| debug!(%player, %kind, %err, "power-up rejected"))?;

        self.commit();
        Ok(outcome)
    }

    /// Take back the most recent placement.
    ///
    /// Power-up counts and bomb removals stay as they are.
    pub fn undo(&mut self) -> Result<Status, UndoError> {
        if self.status.is_terminal() {
            return Err(UndoError::NothingToUndo);
        }
        let record = *self.history.last().ok_or(UndoError::NothingToUndo)?;

        self.board
            .clear(record.cell)
            .map_err(|_| UndoError::NothingToUndo)?;
        self.history.pop_back();

        self.current = record.player;
        self.next_sequence = record.sequence;
        if record.consumed_extra_turn {
            self.power_ups.restore_extra_turn(record.player);
        }

        let status = self.commit();
        debug!(player = %record.player, cell = record.cell, "move undone");
        Ok(status)
    }

    /// Start over. A new size also regenerates the rules.
    pub fn reset(&mut self, size: Option<usize>) -> Result<Status, BoardError> {
        let size = size.unwrap_or(self.config.board_size);
        let board = Board::new(size)?;

        if size != self.rules.size() {
            self.rules = LineRules::new(size);
        }
        self.config.board_size = size;
        self.board = board;
        self.power_ups = PowerUpState::new(self.config.power_ups);
        self.history.clear();
        self.current = self.config.first_player;
        self.next_sequence = 0;

        info!(size, "game reset");
        Ok(self.commit())
    }

    /// Lift any freeze; called when a real-time freeze expires.
    pub fn clear_freeze(&mut self) -> Option<Mark> {
        let cleared = self.power_ups.clear_freeze();
        if cleared.is_some() {
            self.generation += 1;
        }
        cleared
    }

    /// Pass the turn because the current player's time ran out.
    ///
    /// The skipped turn counts as the frozen turn if the player was frozen,
    /// and forfeits a pending extra turn.
    pub fn force_advance_turn(&mut self) -> Result<Status, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current;
        self.power_ups.take_freeze(player);
        self.power_ups.take_extra_turn(player);
        self.current = player.opponent();

        debug!(%player, next = %self.current, "turn forced");
        Ok(self.commit())
    }

    /// Commit a move computed against an earlier snapshot.
    ///
    /// Rejected as stale if anything changed since that snapshot, then
    /// validated like any other move.
    pub fn commit_proposal(&mut self, proposal: Proposal) -> Result<Status, MoveError> {
        if proposal.generation != self.generation {
            debug!(
                proposed = proposal.generation,
                current = self.generation,
                "stale proposal discarded"
            );
            return Err(MoveError::StaleProposal {
                proposed: proposal.generation,
                current: self.generation,
            });
        }
        self.apply_move(proposal.player, proposal.cell)
    }

    /// Run one queued command.
    pub fn execute(&mut self, command: Command) -> CommandResult<Status> {
        match command {
            Command::Place { player, cell } => Ok(self.apply_move(player, cell)?),
            Command::PowerUp { player, kind } => {
                self.use_power_up(player, kind)?;
                Ok(self.status.clone())
            }
            Command::Undo => Ok(self.undo()?),
            Command::Reset { size } => Ok(self.reset(size)?),
            Command::ClearFreeze => {
                self.clear_freeze();
                Ok(self.status.clone())
            }
            Command::ForceAdvanceTurn => Ok(self.force_advance_turn()?),
        }
    }
}
