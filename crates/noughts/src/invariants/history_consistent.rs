//! History consistency: every marker on the board is accounted for.

use super::Invariant;
use crate::{Board, GameEngine};

fn occupied(board: &Board) -> usize {
    board.rows().iter().flatten().filter(|cell| !cell.is_empty()).count()
}

/// Invariant: occupied cells equal seeded cells plus accepted moves.
///
/// No move is missing from history and no cell is filled without a move.
pub struct HistoryConsistentInvariant;

impl<R> Invariant<GameEngine<R>> for HistoryConsistentInvariant {
    fn holds(game: &GameEngine<R>) -> bool {
        occupied(&game.board) == occupied(&game.seed) + game.history.len()
    }

    fn description() -> &'static str {
        "Occupied cells match seeded cells plus move history"
    }
}
