//! Result of evaluating a board.

use serde::{Deserialize, Serialize};

/// State of a game as seen from its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner and at least one free cell.
    #[default]
    InProgress,
    /// The player in this seat completed a line.
    Win(usize),
    /// The board is full without a winner.
    Draw,
}

impl Outcome {
    /// Returns the winning seat if there is one.
    pub fn winner(&self) -> Option<usize> {
        match self {
            Outcome::Win(seat) => Some(*seat),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}
