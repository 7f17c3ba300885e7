//! Terminal front end for the [`noughts`] engine.
//!
//! - **View**: [`GameView`] is everything the engine needs from a screen
//! - **Console**: [`ConsoleView`] implements it over any reader and writer
//! - **Controller**: [`Controller`] runs the turn loop and the "play again"
//!   cycle
//! - **Setup**: [`build_engine`] seats players from flags and prompts

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod console;
mod controller;
mod setup;
mod view;

pub use cli::Cli;
pub use console::{ConsoleView, parse_coordinate};
pub use controller::{Controller, outcome_text};
pub use setup::{
    CROSS_SYMBOL, FIRST_PLAYER_NAME, SECOND_PLAYER_NAME, SeatPlan, ZERO_SYMBOL, build_engine,
    plan_seats,
};
pub use view::GameView;
