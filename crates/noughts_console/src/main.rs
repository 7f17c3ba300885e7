//! noughts - tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use noughts_console::{Cli, ConsoleView, Controller, build_engine};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.engine_config()?;
    let stdin = std::io::stdin();
    let mut view = ConsoleView::new(stdin.lock(), std::io::stdout());
    let engine = build_engine(&cli, config, &mut view)?;

    let mut controller = Controller::new(engine, view);
    let outcomes = controller.run()?;
    info!(games = outcomes.len(), "Goodbye");
    Ok(())
}
