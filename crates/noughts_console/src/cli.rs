//! Command-line interface for the `noughts` binary.

use std::path::PathBuf;

use clap::Parser;
use noughts::EngineConfig;
use tracing::{info, instrument};

/// Tic-tac-toe in the terminal, against a friend or a random bot.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name of the first player (asked for if omitted)
    #[arg(long)]
    pub player1: Option<String>,

    /// Name of the second player (asked for if omitted, ignored with --bot)
    #[arg(long)]
    pub player2: Option<String>,

    /// Name of the player who moves first
    #[arg(long)]
    pub first: Option<String>,

    /// Play against the random bot instead of a second human
    #[arg(long)]
    pub bot: bool,

    /// Seed for the bot's random number generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Board side length (overrides the config file)
    #[arg(long)]
    pub size: Option<usize>,

    /// Path to a TOML engine configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Loads the engine configuration and applies command-line overrides.
    #[instrument(skip(self))]
    pub fn engine_config(&self) -> anyhow::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)?,
            None => {
                info!("No config file given, using defaults");
                EngineConfig::default()
            }
        };
        if let Some(size) = self.size {
            config = config.with_size(size);
        }
        config.validate()?;
        Ok(config)
    }
}
