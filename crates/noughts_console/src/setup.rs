//! Seating players before the first game.

use anyhow::Result;
use noughts::{EngineConfig, GameBuilder, GameEngine, Player};
use rand::rngs::StdRng;
use tracing::{info, instrument, warn};

use crate::cli::Cli;
use crate::view::GameView;

/// Name used when the first player leaves the prompt blank.
pub const FIRST_PLAYER_NAME: &str = "First player";
/// Name used when the second player leaves the prompt blank.
pub const SECOND_PLAYER_NAME: &str = "Second player";

/// Marker of whoever moves first.
pub const CROSS_SYMBOL: char = 'x';
/// Marker of whoever moves second.
pub const ZERO_SYMBOL: char = 'o';

/// Who sits where and who opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatPlan {
    /// Names in seat order.
    pub names: [String; 2],
    /// Seat that moves first.
    pub first_turn: usize,
}

/// Resolves names and the opening seat.
///
/// Equal names get a suffix on the second seat. A `first` name that matches
/// neither player leaves the first seat to open.
#[instrument]
pub fn plan_seats(first_name: &str, second_name: &str, first: Option<&str>) -> SeatPlan {
    let first_name = first_name.trim().to_string();
    let mut second_name = second_name.trim().to_string();
    if first_name == second_name {
        second_name = format!("{second_name} (2)");
    }
    let first_turn = match first.map(str::trim) {
        None => 0,
        Some(name) if name == first_name => 0,
        Some(name) if name == second_name => 1,
        Some(name) => {
            warn!(name, "First-turn player not found, first seat opens");
            0
        }
    };
    SeatPlan {
        names: [first_name, second_name],
        first_turn,
    }
}

/// Builds the engine, asking the view for any names not given on the
/// command line.
#[instrument(skip_all, fields(bot = cli.bot))]
pub fn build_engine<V: GameView>(
    cli: &Cli,
    mut config: EngineConfig,
    view: &mut V,
) -> Result<GameEngine<StdRng>> {
    let first_name = match &cli.player1 {
        Some(name) => name.clone(),
        None => view.ask_name("Player 1", FIRST_PLAYER_NAME)?,
    };
    let first_name = non_blank(first_name, FIRST_PLAYER_NAME);

    let builder = GameBuilder::new();
    let builder = if cli.bot {
        let plan = plan_seats(&first_name, config.bot_name(), cli.first.as_deref());
        let human_symbol = if config.bot_symbol() == CROSS_SYMBOL {
            ZERO_SYMBOL
        } else {
            CROSS_SYMBOL
        };
        let [human, bot] = plan.names;
        config = config.with_bot_name(bot);
        builder
            .human_vs_bot(Player::human(human, human_symbol)?)
            .first_turn(plan.first_turn)
    } else {
        let second_name = match &cli.player2 {
            Some(name) => name.clone(),
            None => view.ask_name("Player 2", SECOND_PLAYER_NAME)?,
        };
        let second_name = non_blank(second_name, SECOND_PLAYER_NAME);
        let plan = plan_seats(&first_name, &second_name, cli.first.as_deref());
        let symbols = if plan.first_turn == 0 {
            [CROSS_SYMBOL, ZERO_SYMBOL]
        } else {
            [ZERO_SYMBOL, CROSS_SYMBOL]
        };
        let [first, second] = plan.names;
        builder
            .players(
                Player::human(first, symbols[0])?,
                Player::human(second, symbols[1])?,
            )
            .first_turn(plan.first_turn)
    };

    let builder = match cli.seed {
        Some(seed) => builder.seed(seed),
        None => builder,
    };
    let engine = builder.config(config).build()?;
    info!(
        first = %engine.players()[0],
        second = %engine.players()[1],
        opener = %engine.current_player().name(),
        "Players seated"
    );
    Ok(engine)
}

fn non_blank(name: String, default: &str) -> String {
    if name.trim().is_empty() {
        default.to_string()
    } else {
        name
    }
}
