//! Error types for the engine.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The coordinate lies outside the board.
    #[display("Coordinate ({row}, {col}) is outside a {size}x{size} board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },

    /// The target cell already bears a marker.
    #[display("Cell is already taken: ({row}, {col})")]
    CellTaken {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// An automated move was requested with no free cell left.
    #[display("No cells available")]
    BoardFull,

    /// The game already has an outcome.
    #[display("Game is already over")]
    GameOver,

    /// An automated move was requested while a human seat is to move.
    #[display("It's {_0}'s turn, not the automated player's")]
    NotAutomatedTurn(#[error(not(source))] String),

    /// The two players cannot share a game.
    #[display("Invalid players: {_0}")]
    InvalidPlayers(#[error(not(source))] String),

    /// The board cannot be used with this configuration.
    #[display("Invalid board: {_0}")]
    InvalidBoard(#[error(not(source))] String),

    /// A postcondition failed after a move.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}

impl GameError {
    /// Returns true for errors the caller should answer by asking again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::CellTaken { .. } | GameError::OutOfRange { .. })
    }
}

/// Board text could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Configuration could not be loaded.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
