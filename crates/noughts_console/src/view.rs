//! The view side of a game.
//!
//! The engine knows nothing about screens or input. A [`GameView`] draws
//! the board, collects coordinates and shows messages; the
//! [`Controller`](crate::Controller) wires it to a
//! [`GameEngine`](noughts::GameEngine).

use anyhow::Result;
use noughts::{Board, Player};

/// Presentation and input for one game session.
pub trait GameView {
    /// Asks for a player's name, offering a default.
    fn ask_name(&mut self, label: &str, default: &str) -> Result<String>;

    /// Draws the board.
    fn render(&mut self, board: &Board) -> Result<()>;

    /// Reads the next coordinate for `player`.
    ///
    /// Returns `None` when the user quits.
    fn read_move(&mut self, player: &Player) -> Result<Option<(usize, usize)>>;

    /// Shows a non-fatal message, e.g. a rejected move.
    fn notice(&mut self, message: &str) -> Result<()>;

    /// Shows the end-of-game text.
    fn announce(&mut self, text: &str) -> Result<()>;

    /// Asks whether to start another game.
    fn play_again(&mut self) -> Result<bool>;
}
