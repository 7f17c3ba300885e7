//! Write-once cells: a marker is never overwritten.

use super::Invariant;
use crate::GameEngine;

/// Invariant: replaying history onto the seed reproduces the board.
///
/// Every recorded move must land on a cell that was still empty, with the
/// actor's own marker.
pub struct WriteOnceInvariant;

impl<R> Invariant<GameEngine<R>> for WriteOnceInvariant {
    fn holds(game: &GameEngine<R>) -> bool {
        let mut replayed = game.seed.clone();
        for record in &game.history {
            let Some(player) = game.players.iter().find(|p| *p.name() == record.actor) else {
                return false;
            };
            if replayed.place(record.row, record.col, player.symbol()).is_err() {
                return false;
            }
        }
        replayed == game.board
    }

    fn description() -> &'static str {
        "Cells are written at most once"
    }
}
