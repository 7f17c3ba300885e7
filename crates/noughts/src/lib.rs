//! Tic-tac-toe game-state engine.
//!
//! The engine validates moves, alternates turns, detects wins and draws on
//! an N x N board and plays uniformly random moves for an automated seat.
//! Rendering and input belong to the caller.
//!
//! # Architecture
//!
//! - **Board**: square grid of [`Cell`]s with write-once placement
//! - **Rules**: pure line and draw detection ([`rules`])
//! - **Engine**: [`GameEngine`] owns board, seats, turn, history and outcome
//! - **Bot**: [`pick_cell`] draws a free cell from an injected [`RandomSource`]
//!
//! # Example
//!
//! ```
//! use noughts::{GameBuilder, GameError, Outcome, Player};
//!
//! let mut game = GameBuilder::new()
//!     .players(Player::human("Ada", 'x')?, Player::human("Grace", 'o')?)
//!     .build()?;
//!
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.submit_move(row, col)?;
//! }
//! assert_eq!(game.evaluate(), Outcome::Win(0));
//! assert_eq!(game.submit_move(2, 2), Err(GameError::GameOver));
//! # Ok::<(), GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod bot;
mod builder;
mod config;
mod engine;
mod error;
pub mod invariants;
mod outcome;
mod random;
pub mod rules;
mod types;

pub use action::MoveRecord;
pub use board::{Board, DEFAULT_SIZE, EMPTY_GLYPH, MAX_SIZE};
pub use bot::{Sampling, pick_cell};
pub use builder::GameBuilder;
pub use config::EngineConfig;
pub use engine::GameEngine;
pub use error::{BoardParseError, ConfigError, GameError};
pub use outcome::Outcome;
pub use random::{RandomSource, ScriptedSource};
pub use types::{Cell, Player, PlayerKind};
