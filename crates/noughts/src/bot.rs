//! Random move selection for the automated seat.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::Board;
use crate::error::GameError;
use crate::random::RandomSource;

/// How a free cell is drawn.
///
/// Both strategies pick uniformly among free cells; they differ only in how
/// many draws they take from the source.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Sampling {
    /// Draw a row and a column until the cell is free.
    #[default]
    Rejection,
    /// Draw once from the list of free cells.
    FreeList,
}

/// Picks a free cell uniformly at random.
///
/// # Errors
///
/// Returns [`GameError::BoardFull`] if the board has no free cell.
#[instrument(skip(board, source), fields(size = board.size(), free = board.count_free()))]
pub fn pick_cell<R: RandomSource + ?Sized>(
    board: &Board,
    source: &mut R,
    sampling: Sampling,
) -> Result<(usize, usize), GameError> {
    if board.is_full() {
        return Err(GameError::BoardFull);
    }
    let n = board.size();
    let cell = match sampling {
        Sampling::Rejection => loop {
            let row = source.next_below(n);
            let col = source.next_below(n);
            if board.is_free(row, col)? {
                break (row, col);
            }
            debug!(row, col, "Drew an occupied cell, retrying");
        },
        Sampling::FreeList => {
            let free = board.free_cells();
            free[source.next_below(free.len())]
        }
    };
    debug!(row = cell.0, col = cell.1, "Picked cell");
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;

    #[test]
    fn test_rejection_skips_taken_cells() {
        let board: Board = "x . .\n. x .\n. . .".parse().unwrap();
        // (0,0) and (1,1) are taken, (2,1) is free.
        let mut source = ScriptedSource::new([0, 0, 1, 1, 2, 1]);
        let cell = pick_cell(&board, &mut source, Sampling::Rejection).unwrap();
        assert_eq!(cell, (2, 1));
        assert_eq!(source.consumed(), 6);
    }

    #[test]
    #[should_panic(expected = "ScriptedSource exhausted")]
    fn test_rejection_stops_when_script_runs_out() {
        let board: Board = "x . .\n. . .\n. . .".parse().unwrap();
        // Every scripted draw lands on the taken corner.
        let mut source = ScriptedSource::new([0, 0]);
        let _ = pick_cell(&board, &mut source, Sampling::Rejection);
    }

    #[test]
    fn test_free_list_takes_one_draw() {
        let board: Board = "x . .\n. x .\n. . .".parse().unwrap();
        let mut source = ScriptedSource::new([2]);
        let cell = pick_cell(&board, &mut source, Sampling::FreeList).unwrap();
        assert_eq!(cell, (1, 0));
        assert_eq!(source.consumed(), 1);
    }

    #[test]
    fn test_full_board_errors() {
        let board: Board = "x o x\nx o o\no x x".parse().unwrap();
        let mut source = ScriptedSource::default();
        for sampling in [Sampling::Rejection, Sampling::FreeList] {
            assert_eq!(
                pick_cell(&board, &mut source, sampling),
                Err(GameError::BoardFull)
            );
        }
        assert_eq!(source.consumed(), 0);
    }

    #[test]
    fn test_sampling_display() {
        assert_eq!(Sampling::FreeList.to_string(), "free-list");
        assert_eq!(Sampling::Rejection.to_string(), "rejection");
    }
}
