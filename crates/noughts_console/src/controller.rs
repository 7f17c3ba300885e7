//! Drives a [`GameEngine`] through a [`GameView`].

use anyhow::Result;
use noughts::{GameEngine, Outcome, RandomSource};
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

use crate::view::GameView;

/// Text shown when a game ends, or `"continue"` while it is running.
pub fn outcome_text<R>(engine: &GameEngine<R>) -> String {
    match engine.evaluate() {
        Outcome::Win(seat) => format!("{} won!", engine.players()[seat].name()),
        Outcome::Draw => "Nobody won".to_string(),
        Outcome::InProgress => "continue".to_string(),
    }
}

/// Plays games until the user stops.
pub struct Controller<V, R = StdRng> {
    engine: GameEngine<R>,
    view: V,
}

impl<V: GameView, R: RandomSource> Controller<V, R> {
    /// Creates a controller for a freshly built engine.
    pub fn new(engine: GameEngine<R>, view: V) -> Self {
        Self { engine, view }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    /// Consumes the controller, returning the view.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Runs games back to back.
    ///
    /// Returns the outcome of every finished game. Quitting mid-game
    /// discards that game.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Vec<Outcome>> {
        let mut finished = Vec::new();
        loop {
            let Some(outcome) = self.play_one()? else {
                info!(games = finished.len(), "Player quit");
                return Ok(finished);
            };
            finished.push(outcome);
            self.view.announce(&outcome_text(&self.engine))?;
            if !self.view.play_again()? {
                info!(games = finished.len(), "Session finished");
                return Ok(finished);
            }
            self.engine.reset();
        }
    }

    /// Plays until the game ends; `None` if the user quits.
    fn play_one(&mut self) -> Result<Option<Outcome>> {
        self.view.render(self.engine.board())?;
        while !self.engine.outcome().is_terminal() {
            let player = self.engine.current_player().clone();
            if player.is_automated() {
                let (row, col) = self.engine.submit_automated_move()?;
                debug!(row, col, "Automated move");
                self.view
                    .notice(&format!("{} plays {row} {col}", player.name()))?;
            } else {
                let Some((row, col)) = self.view.read_move(&player)? else {
                    return Ok(None);
                };
                match self.engine.submit_move(row, col) {
                    Ok(_) => {}
                    Err(e) if e.is_recoverable() => {
                        warn!(error = %e, "Move rejected");
                        self.view.notice(&e.to_string())?;
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            self.view.render(self.engine.board())?;
        }
        Ok(Some(self.engine.outcome()))
    }
}
