//! Square board of cells.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{BoardParseError, GameError};
use crate::types::Cell;

/// Glyph used for an empty cell in the text form.
pub const EMPTY_GLYPH: char = '.';

/// Default side length.
pub const DEFAULT_SIZE: usize = 3;

/// Largest side length a configuration or parsed board may use.
pub const MAX_SIZE: usize = 64;

/// N x N board, stored as rows.
///
/// Deserialization applies the same shape checks as parsing, so a
/// deserialized board is always square.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    pub(crate) rows: Vec<Vec<Cell>>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    rows: Vec<Vec<Cell>>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardParseError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Self::from_rows(raw.rows)
    }
}

impl Board {
    /// Creates an empty board with the given side length.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            rows: vec![vec![Cell::Empty; size]; size],
        }
    }

    /// Checks that `rows` form a non-empty square no larger than
    /// [`MAX_SIZE`].
    fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardParseError> {
        if rows.is_empty() {
            return Err(BoardParseError::new("board has no rows"));
        }
        let size = rows.len();
        if size > MAX_SIZE {
            return Err(BoardParseError::new(format!(
                "board has {size} rows, at most {MAX_SIZE} allowed"
            )));
        }
        if let Some(bad) = rows.iter().position(|row| row.len() != size) {
            return Err(BoardParseError::new(format!(
                "row {bad} has {} cells, expected {size}",
                rows[bad].len()
            )));
        }
        Ok(Self { rows })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    fn check_range(&self, row: usize, col: usize) -> Result<(), GameError> {
        let size = self.size();
        if row >= size || col >= size {
            return Err(GameError::OutOfRange { row, col, size });
        }
        Ok(())
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.check_range(row, col)?;
        Ok(self.rows[row][col])
    }

    /// Checks if a cell is empty.
    pub fn is_free(&self, row: usize, col: usize) -> Result<bool, GameError> {
        Ok(self.get(row, col)?.is_empty())
    }

    /// Writes a marker into an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] for a coordinate off the board and
    /// [`GameError::CellTaken`] if the cell already holds a marker.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, symbol: char) -> Result<(), GameError> {
        if !self.is_free(row, col)? {
            return Err(GameError::CellTaken { row, col });
        }
        self.rows[row][col] = Cell::Marker(symbol);
        Ok(())
    }

    /// Number of empty cells.
    pub fn count_free(&self) -> usize {
        self.cells().filter(|(_, _, cell)| cell.is_empty()).count()
    }

    /// Number of cells bearing the given marker.
    pub fn count_symbol(&self, symbol: char) -> usize {
        self.cells()
            .filter(|(_, _, cell)| *cell == Cell::Marker(symbol))
            .count()
    }

    /// Empty coordinates in row-major order.
    pub fn free_cells(&self) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|(_, _, cell)| cell.is_empty())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.count_free() == 0
    }

    fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, *cell))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parses rows of whitespace-separated glyphs, `.` for empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<Cell>> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|token| {
                        let mut chars = token.chars();
                        match (chars.next(), chars.next()) {
                            (Some(EMPTY_GLYPH), None) => Ok(Cell::Empty),
                            (Some(symbol), None) => Ok(Cell::Marker(symbol)),
                            _ => Err(BoardParseError::new(format!(
                                "expected a single glyph, found {token:?}"
                            ))),
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<_, _>>()?;
        Self::from_rows(rows)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line = row
                .iter()
                .map(|cell| cell.symbol().unwrap_or(EMPTY_GLYPH).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3);
        assert_eq!(board.size(), 3);
        assert_eq!(board.count_free(), 9);
        assert!(board.rows().iter().all(|row| row.len() == 3));
    }

    #[test]
    fn test_place_and_free() {
        let mut board = Board::default();
        board.place(1, 1, 'x').unwrap();
        assert!(!board.is_free(1, 1).unwrap());
        assert!(board.is_free(0, 0).unwrap());
        assert_eq!(board.get(1, 1).unwrap(), Cell::Marker('x'));
    }

    #[test]
    fn test_place_twice_rejected() {
        let mut board = Board::default();
        board.place(2, 2, 'x').unwrap();
        assert_eq!(
            board.place(2, 2, 'o'),
            Err(GameError::CellTaken { row: 2, col: 2 })
        );
        assert_eq!(board.get(2, 2).unwrap(), Cell::Marker('x'));
    }

    #[test]
    fn test_out_of_range() {
        let board = Board::default();
        assert_eq!(
            board.is_free(3, 0),
            Err(GameError::OutOfRange { row: 3, col: 0, size: 3 })
        );
        assert!(board.is_free(0, 7).is_err());
    }

    #[test]
    fn test_free_plus_occupied_is_area() {
        let mut board = Board::new(4);
        for (i, (row, col)) in [(0, 0), (1, 3), (3, 3), (2, 1), (0, 2)].into_iter().enumerate() {
            board.place(row, col, if i % 2 == 0 { 'x' } else { 'o' }).unwrap();
            let occupied = board.count_symbol('x') + board.count_symbol('o');
            assert_eq!(board.count_free() + occupied, 16);
        }
    }

    #[test]
    fn test_clone_does_not_alias() {
        let original = Board::default();
        let mut copy = original.clone();
        copy.place(0, 0, 'x').unwrap();
        assert!(original.is_free(0, 0).unwrap());
    }

    #[test]
    fn test_free_cells_row_major() {
        let board: Board = "x o x\no . x\n. x o".parse().unwrap();
        assert_eq!(board.free_cells(), vec![(1, 1), (2, 0)]);
    }

    #[test]
    fn test_parse_and_display() {
        let text = "x x x\n. . .\n. o .";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.get(0, 2).unwrap(), Cell::Marker('x'));
        assert_eq!(board.get(2, 1).unwrap(), Cell::Marker('o'));
        assert_eq!(board.to_string(), text);
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert!("x x\n. . .\n. . .".parse::<Board>().is_err());
        assert!("xx . .\n. . .\n. . .".parse::<Board>().is_err());
        assert!("   ".parse::<Board>().is_err());
    }

    #[test]
    fn test_deserialize_rejects_ragged_rows() {
        let ragged = serde_json::from_str::<Board>(r#"{"rows":[["Empty"],[],[]]}"#);
        assert!(ragged.is_err());
        assert!(serde_json::from_str::<Board>(r#"{"rows":[]}"#).is_err());
    }

    #[test]
    fn test_deserialize_accepts_square_board() {
        let board: Board = "x . .\n. o .\n. . .".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_oversized_board() {
        let side = MAX_SIZE + 1;
        let row = vec!["."; side].join(" ");
        let text = vec![row; side].join("\n");
        assert!(text.parse::<Board>().is_err());
    }
}
