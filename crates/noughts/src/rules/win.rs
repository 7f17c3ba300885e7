//! Line detection.

use crate::board::Board;
use crate::types::Cell;
use tracing::instrument;

/// Checks if `symbol` fills a whole row, column or diagonal.
///
/// Works for any side length; an empty board has no winner.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_winner(board: &Board, symbol: char) -> bool {
    let n = board.size();
    if n == 0 {
        return false;
    }
    let rows = board.rows();
    let owns = |row: usize, col: usize| rows[row][col] == Cell::Marker(symbol);

    let any_row = (0..n).any(|row| (0..n).all(|col| owns(row, col)));
    let any_col = (0..n).any(|col| (0..n).all(|row| owns(row, col)));
    let main_diagonal = (0..n).all(|i| owns(i, i));
    let anti_diagonal = (0..n).all(|i| owns(i, n - 1 - i));

    any_row || any_col || main_diagonal || anti_diagonal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert!(!is_winner(&Board::default(), 'x'));
    }

    #[test]
    fn test_winner_horizontal() {
        assert!(is_winner(&board("x x x\n. . .\n. . ."), 'x'));
        assert!(is_winner(&board(". . .\n. . .\no o o"), 'o'));
    }

    #[test]
    fn test_winner_vertical() {
        assert!(is_winner(&board("x . .\nx . .\nx . ."), 'x'));
        assert!(!is_winner(&board("x . .\nx . .\nx . ."), 'o'));
    }

    #[test]
    fn test_winner_main_diagonal() {
        assert!(is_winner(&board("x . .\n. x .\n. . x"), 'x'));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert!(is_winner(&board(". . x\n. x .\nx . ."), 'x'));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert!(!is_winner(&board("x x .\n. o .\n. . ."), 'x'));
    }

    #[test]
    fn test_four_by_four_needs_full_line() {
        let almost = board("x x x .\n. . . .\n. . . .\n. . . .");
        assert!(!is_winner(&almost, 'x'));
        let column = board(". . o .\n. . o .\n. . o .\n. . o .");
        assert!(is_winner(&column, 'o'));
        let anti = board(". . . x\n. . x .\n. x . .\nx . . .");
        assert!(is_winner(&anti, 'x'));
    }

    #[test]
    fn test_single_cell_board() {
        assert!(is_winner(&board("x"), 'x'));
        assert!(!is_winner(&board("."), 'x'));
    }
}
