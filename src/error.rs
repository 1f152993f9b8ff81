//! Error types for engine operations.
//!
//! Every error is recoverable and local: a rejected command leaves the
//! engine unchanged, apart from the freeze consumed by a `Frozen` rejection.

use thiserror::Error;

use crate::core::Mark;
use crate::powerups::PowerUpKind;

/// Errors from direct board access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board size below the minimum of 1
    #[error("Invalid board size: {size} (must be at least 1)")]
    InvalidSize { size: usize },

    /// Cell index outside `0..size²`
    #[error("Cell {index} is out of range (board has {cells} cells)")]
    OutOfRange { index: usize, cells: usize },

    /// Cell already holds a mark
    #[error("Cell {index} is already occupied")]
    CellOccupied { index: usize },
}

/// Errors from placing a mark.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("It is {current}'s turn, not {player}'s")]
    NotYourTurn { player: Mark, current: Mark },

    /// The player is frozen; the attempt used up the freeze
    #[error("{player} is frozen for this turn")]
    Frozen { player: Mark },

    #[error("The game is already over")]
    GameOver,

    #[error(transparent)]
    Board(#[from] BoardError),

    /// An AI proposal computed against an older engine generation
    #[error("Proposal from generation {proposed} is stale (engine is at {current})")]
    StaleProposal { proposed: u64, current: u64 },
}

/// Errors from invoking a power-up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PowerUpError {
    #[error("{player} has no {kind} power-ups left")]
    InsufficientPowerUps { player: Mark, kind: PowerUpKind },

    #[error("It is {current}'s turn, not {player}'s")]
    NotYourTurn { player: Mark, current: Mark },

    #[error("{player} is frozen and cannot use power-ups")]
    Frozen { player: Mark },

    #[error("The game is already over")]
    GameOver,
}

/// Errors from undoing a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UndoError {
    /// Empty move log, or the game already ended
    #[error("Nothing to undo")]
    NothingToUndo,
}

/// Errors from the AI agent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    #[error("No legal move: the board is full")]
    NoLegalMove,
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("Invalid probability {value} for {field} (must be within 0.0..=1.0)")]
    InvalidProbability { field: &'static str, value: f64 },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Any error a queued [`Command`](crate::core::Command) can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    PowerUp(#[from] PowerUpError),

    #[error(transparent)]
    Undo(#[from] UndoError),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Result type alias for engine commands
pub type CommandResult<T> = Result<T, CommandError>;
