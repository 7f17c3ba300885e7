//! Move records.
//!
//! Every accepted move is appended to the engine's history as a
//! [`MoveRecord`]. Records are never edited or reordered.

use serde::{Deserialize, Serialize};

/// One accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Name of the player credited with the move.
    pub actor: String,
    /// Row of the placed marker.
    pub row: usize,
    /// Column of the placed marker.
    pub col: usize,
}

impl MoveRecord {
    /// Creates a new record.
    pub fn new(actor: impl Into<String>, row: usize, col: usize) -> Self {
        Self {
            actor: actor.into(),
            row,
            col,
        }
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.actor, self.row, self.col)
    }
}
