//! Construction of [`GameEngine`]s.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};

use crate::board::{Board, MAX_SIZE};
use crate::config::EngineConfig;
use crate::engine::GameEngine;
use crate::error::GameError;
use crate::outcome::Outcome;
use crate::random::RandomSource;
use crate::types::Player;

/// Builder for a [`GameEngine`].
///
/// ```
/// use noughts::{GameBuilder, Outcome, Player};
///
/// let mut game = GameBuilder::new()
///     .human_vs_bot(Player::human("Ada", 'x')?)
///     .seed(7)
///     .build()?;
/// game.submit_move(1, 1)?;
/// game.submit_automated_move()?;
/// assert_eq!(game.move_history().len(), 2);
/// assert_eq!(game.evaluate(), Outcome::InProgress);
/// # Ok::<(), noughts::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GameBuilder<R = StdRng> {
    config: EngineConfig,
    first: Option<Player>,
    second: Option<Player>,
    board: Option<Board>,
    first_turn: usize,
    rng: R,
}

impl GameBuilder<StdRng> {
    /// Creates a builder with default configuration and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            first: None,
            second: None,
            board: None,
            first_turn: 0,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeds the RNG for reproducible automated moves.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Default for GameBuilder<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> GameBuilder<R> {
    /// Seats two players in order.
    pub fn players(mut self, first: Player, second: Player) -> Self {
        self.first = Some(first);
        self.second = Some(second);
        self
    }

    /// Seats a human first and the configured automated player second.
    pub fn human_vs_bot(mut self, human: Player) -> Self {
        self.first = Some(human);
        self.second = None;
        self
    }

    /// Starts from a pre-filled board instead of an empty one.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Chooses the seat that moves first, also after every reset.
    pub fn first_turn(mut self, seat: usize) -> Self {
        self.first_turn = seat;
        self
    }

    /// Replaces the configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Swaps in another random source.
    pub fn with_rng<S: RandomSource>(self, rng: S) -> GameBuilder<S> {
        GameBuilder {
            config: self.config,
            first: self.first,
            second: self.second,
            board: self.board,
            first_turn: self.first_turn,
            rng,
        }
    }
}

impl<R: RandomSource> GameBuilder<R> {
    /// Validates the setup and builds the engine.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidPlayers`] if the first seat is missing, names or
    ///   symbols collide, or the first-turn seat does not exist
    /// - [`GameError::InvalidBoard`] if the size is zero or above
    ///   [`MAX_SIZE`], or a seeded board has a different size
    #[instrument(skip(self), fields(size = self.config.size(), first_turn = self.first_turn))]
    pub fn build(self) -> Result<GameEngine<R>, GameError> {
        let size = self.config.size();
        if size == 0 || size > MAX_SIZE {
            return Err(GameError::InvalidBoard(format!(
                "size must be between 1 and {MAX_SIZE}, got {size}"
            )));
        }

        let first = self
            .first
            .ok_or_else(|| GameError::InvalidPlayers("first seat is empty".to_string()))?;
        let second = match self.second {
            Some(player) => player,
            None => Player::automated(self.config.bot_name(), self.config.bot_symbol())?,
        };
        if first.name() == second.name() {
            return Err(GameError::InvalidPlayers(format!(
                "both players are named {:?}",
                first.name()
            )));
        }
        if first.symbol() == second.symbol() {
            return Err(GameError::InvalidPlayers(format!(
                "both players use {:?}",
                first.symbol()
            )));
        }
        if self.first_turn > 1 {
            return Err(GameError::InvalidPlayers(format!(
                "there is no seat {}",
                self.first_turn
            )));
        }

        let board = match self.board {
            Some(board) if board.size() != size => {
                return Err(GameError::InvalidBoard(format!(
                    "expected {size}x{size}, found {0}x{0}",
                    board.size()
                )));
            }
            Some(board) => board,
            None => Board::new(size),
        };

        let mut engine = GameEngine {
            config: self.config,
            seed: board.clone(),
            board,
            players: [first, second],
            first_turn: self.first_turn,
            current: self.first_turn,
            history: Vec::new(),
            outcome: Outcome::InProgress,
            rng: self.rng,
        };
        engine.outcome = engine.evaluate();

        info!(
            first = %engine.players[0],
            second = %engine.players[1],
            outcome = ?engine.outcome,
            "Game created"
        );
        Ok(engine)
    }
}
