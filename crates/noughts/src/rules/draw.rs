//! Outcome evaluation.

use crate::board::Board;
use crate::outcome::Outcome;
use crate::rules::win::is_winner;
use tracing::instrument;

/// Evaluates a board for the players holding `symbols`, in seat order.
///
/// Seats are checked in order, so if two seats both hold a line the first
/// one is reported. A full board without a line is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board, symbols: [char; 2]) -> Outcome {
    if let Some(seat) = symbols.iter().position(|symbol| is_winner(board, *symbol)) {
        return Outcome::Win(seat);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
