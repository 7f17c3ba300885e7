//! The game-state engine.
//!
//! [`GameEngine`] owns the board and the two seats, validates every move,
//! keeps the append-only history and caches the outcome after each accepted
//! move. One engine covers both human-vs-human and human-vs-bot play: the
//! second seat is either a human [`Player`] or an automated one, and
//! [`GameEngine::submit_automated_move`] plays for an automated seat.

use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

use crate::action::MoveRecord;
use crate::board::Board;
use crate::bot::pick_cell;
use crate::config::EngineConfig;
use crate::error::GameError;
#[cfg(debug_assertions)]
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::outcome::Outcome;
use crate::random::RandomSource;
use crate::rules;
use crate::types::Player;

/// Tic-tac-toe engine.
///
/// Every mutating operation takes `&mut self`; an engine must be driven by a
/// single caller at a time.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    pub(crate) config: EngineConfig,
    pub(crate) board: Board,
    pub(crate) seed: Board,
    pub(crate) players: [Player; 2],
    pub(crate) first_turn: usize,
    pub(crate) current: usize,
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) outcome: Outcome,
    pub(crate) rng: R,
}

impl<R: RandomSource> GameEngine<R> {
    /// Places the current player's marker at `(row, col)`.
    ///
    /// Returns the outcome after the move.
    ///
    /// # Errors
    ///
    /// - [`GameError::OutOfRange`] if the coordinate is off the board
    /// - [`GameError::GameOver`] if the game already has an outcome
    /// - [`GameError::CellTaken`] if the cell holds a marker
    ///
    /// A rejected move leaves board, turn and history untouched.
    #[instrument(skip(self), fields(player = %self.players[self.current].name()))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<Outcome, GameError> {
        let free = self.board.is_free(row, col)?;
        self.ensure_not_over()?;
        if !free {
            warn!(row, col, "Rejected move on taken cell");
            return Err(GameError::CellTaken { row, col });
        }
        self.apply(row, col)
    }

    /// Plays a uniformly random free cell for the automated seat to move.
    ///
    /// Returns the chosen coordinate.
    ///
    /// # Errors
    ///
    /// - [`GameError::BoardFull`] if no cell is free
    /// - [`GameError::GameOver`] if the game already has an outcome
    /// - [`GameError::NotAutomatedTurn`] if a human seat is to move
    #[instrument(skip(self), fields(sampling = %self.config.sampling()))]
    pub fn submit_automated_move(&mut self) -> Result<(usize, usize), GameError> {
        if self.board.is_full() {
            warn!("Automated move requested on a full board");
            return Err(GameError::BoardFull);
        }
        self.ensure_not_over()?;
        let player = &self.players[self.current];
        if !player.is_automated() {
            return Err(GameError::NotAutomatedTurn(player.name().clone()));
        }
        let (row, col) = pick_cell(&self.board, &mut self.rng, self.config.sampling())?;
        self.apply(row, col)?;
        Ok((row, col))
    }

    /// Clears the board and history and hands the turn back to the
    /// first-turn seat. Players are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), outcome = ?self.outcome, "Resetting game");
        self.board = Board::new(self.config.size());
        self.seed = self.board.clone();
        self.history.clear();
        self.current = self.first_turn;
        self.outcome = Outcome::InProgress;
    }

    fn ensure_not_over(&self) -> Result<(), GameError> {
        if self.config.enforce_game_over() && self.outcome.is_terminal() {
            warn!(outcome = ?self.outcome, "Move after game over");
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn apply(&mut self, row: usize, col: usize) -> Result<Outcome, GameError> {
        let player = &self.players[self.current];
        self.board.place(row, col, player.symbol())?;
        self.history
            .push(MoveRecord::new(player.name().as_str(), row, col));
        debug!(actor = %player.name(), row, col, "Move accepted");

        self.current = 1 - self.current;
        self.outcome = self.evaluate();

        #[cfg(debug_assertions)]
        self.check_postconditions()?;

        if self.outcome.is_terminal() {
            info!(outcome = ?self.outcome, moves = self.history.len(), "Game finished");
        }
        Ok(self.outcome)
    }

    #[cfg(debug_assertions)]
    fn check_postconditions(&self) -> Result<(), GameError> {
        EngineInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            GameError::InvariantViolation(format!("Postcondition failed: {descriptions}"))
        })
    }
}

impl<R> GameEngine<R> {
    /// Evaluates the board.
    ///
    /// Pure: calling it twice without a move in between gives the same answer.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> Outcome {
        rules::evaluate(&self.board, self.symbols())
    }

    /// Returns a copy of the board.
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the accepted moves, oldest first.
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns both seats in order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the seat to move.
    pub fn current_seat(&self) -> usize {
        self.current
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Returns the seat that moves first after a reset.
    pub fn first_turn(&self) -> usize {
        self.first_turn
    }

    /// Returns the outcome cached after the last accepted move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the winning player, if any.
    pub fn winner(&self) -> Option<&Player> {
        self.outcome.winner().map(|seat| &self.players[seat])
    }

    /// Returns the seat held by an automated player, if any.
    pub fn automated_seat(&self) -> Option<usize> {
        self.players.iter().position(Player::is_automated)
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Markers in seat order.
    pub(crate) fn symbols(&self) -> [char; 2] {
        [self.players[0].symbol(), self.players[1].symbol()]
    }
}
